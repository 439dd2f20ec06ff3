use super::*;

pub(crate) trait CommentApi {
  async fn fetch_reply_page(
    &self,
    parent_id: &str,
    page_size: usize,
    page_token: Option<&str>,
  ) -> Result<ReplyPage>;

  async fn fetch_thread_page(
    &self,
    video_id: &str,
    page_size: usize,
    order: Order,
    expansion: Expansion,
    page_token: Option<&str>,
  ) -> Result<ThreadPage>;
}
