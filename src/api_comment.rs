use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct ApiComment {
  pub(crate) id: String,
  pub(crate) snippet: CommentSnippet,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommentSnippet {
  #[serde(default)]
  pub(crate) author_display_name: String,
  #[serde(default)]
  pub(crate) like_count: u64,
  pub(crate) published_at: DateTime<Utc>,
  #[serde(default)]
  pub(crate) text_display: String,
  pub(crate) updated_at: DateTime<Utc>,
}
