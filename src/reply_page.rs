use super::*;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReplyPage {
  #[serde(default)]
  pub(crate) items: Vec<ApiComment>,
  pub(crate) next_page_token: Option<String>,
}
