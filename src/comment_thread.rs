use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct CommentThread {
  pub(crate) replies: Option<InlineReplies>,
  pub(crate) snippet: ThreadSnippet,
}

impl CommentThread {
  pub(crate) fn inline_replies(&self) -> &[ApiComment] {
    self
      .replies
      .as_ref()
      .map(|replies| replies.comments.as_slice())
      .unwrap_or_default()
  }

  pub(crate) fn top_level_comment(&self) -> &ApiComment {
    &self.snippet.top_level_comment
  }

  pub(crate) fn total_reply_count(&self) -> u64 {
    self.snippet.total_reply_count
  }
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct InlineReplies {
  #[serde(default)]
  pub(crate) comments: Vec<ApiComment>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ThreadSnippet {
  pub(crate) top_level_comment: ApiComment,
  #[serde(default)]
  pub(crate) total_reply_count: u64,
}
