use super::*;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ThreadPage {
  #[serde(default)]
  pub(crate) items: Vec<CommentThread>,
  pub(crate) next_page_token: Option<String>,
}
