use super::*;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct CommentRecord {
  pub(crate) author: String,
  pub(crate) comment_id: String,
  pub(crate) level: Level,
  pub(crate) like_count: u64,
  pub(crate) parent_id: String,
  pub(crate) published_at: DateTime<Utc>,
  pub(crate) text: String,
  pub(crate) updated_at: DateTime<Utc>,
}

impl CommentRecord {
  fn new(comment: &ApiComment, level: Level, parent_id: String) -> Self {
    let snippet = &comment.snippet;

    Self {
      author: snippet.author_display_name.clone(),
      comment_id: comment.id.clone(),
      level,
      like_count: snippet.like_count,
      parent_id,
      published_at: snippet.published_at,
      text: snippet.text_display.clone(),
      updated_at: snippet.updated_at,
    }
  }

  // Replies always point at the thread they were collected under, not at
  // whatever parent the snippet itself names.
  pub(crate) fn reply(comment: &ApiComment, parent_id: &str) -> Self {
    Self::new(comment, Level::Reply, parent_id.to_string())
  }

  pub(crate) fn row(&self, expansion: Expansion) -> Vec<String> {
    let published_at = self.published_at.to_rfc3339_opts(SecondsFormat::AutoSi, true);
    let updated_at = self.updated_at.to_rfc3339_opts(SecondsFormat::AutoSi, true);

    match expansion {
      Expansion::Flat => vec![
        self.author.clone(),
        self.text.clone(),
        self.like_count.to_string(),
        published_at,
        updated_at,
      ],
      Expansion::WithReplies => vec![
        self.level.depth().to_string(),
        self.author.clone(),
        self.text.clone(),
        self.like_count.to_string(),
        published_at,
        updated_at,
        self.parent_id.clone(),
        self.comment_id.clone(),
      ],
    }
  }

  pub(crate) fn top_level(comment: &ApiComment) -> Self {
    Self::new(comment, Level::TopLevel, String::new())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_comment() -> ApiComment {
    serde_json::from_str(
      r#"{
        "id": "reply-1",
        "snippet": {
          "authorDisplayName": "@someone",
          "textDisplay": "nice &amp; tidy",
          "likeCount": 7,
          "parentId": "somewhere-else",
          "publishedAt": "2024-03-01T12:00:00Z",
          "updatedAt": "2024-03-02T08:30:15Z"
        }
      }"#,
    )
    .unwrap()
  }

  #[test]
  fn top_level_has_empty_parent() {
    let record = CommentRecord::top_level(&sample_comment());

    assert_eq!(record.level, Level::TopLevel);
    assert_eq!(record.parent_id, "");
    assert_eq!(record.comment_id, "reply-1");
    assert_eq!(record.author, "@someone");
    assert_eq!(record.like_count, 7);
  }

  #[test]
  fn reply_takes_parent_from_thread() {
    let record = CommentRecord::reply(&sample_comment(), "thread-a");

    assert_eq!(record.level, Level::Reply);
    assert_eq!(record.parent_id, "thread-a");
  }

  #[test]
  fn row_with_replies_follows_column_order() {
    let record = CommentRecord::reply(&sample_comment(), "thread-a");

    assert_eq!(
      record.row(Expansion::WithReplies),
      vec![
        "1",
        "@someone",
        "nice &amp; tidy",
        "7",
        "2024-03-01T12:00:00Z",
        "2024-03-02T08:30:15Z",
        "thread-a",
        "reply-1",
      ]
    );

    assert_eq!(
      record.row(Expansion::WithReplies).len(),
      Expansion::WithReplies.columns().len()
    );
  }

  #[test]
  fn flat_row_omits_tree_columns() {
    let record = CommentRecord::top_level(&sample_comment());

    assert_eq!(
      record.row(Expansion::Flat),
      vec![
        "@someone",
        "nice &amp; tidy",
        "7",
        "2024-03-01T12:00:00Z",
        "2024-03-02T08:30:15Z",
      ]
    );
  }
}
