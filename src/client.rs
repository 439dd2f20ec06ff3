use super::*;

pub(crate) struct Client {
  api_key: String,
  base_url: String,
  client: reqwest::Client,
}

impl Client {
  const API_KEY_HEADER: &str = "X-Goog-Api-Key";

  pub(crate) const DEFAULT_BASE_URL: &str =
    "https://www.googleapis.com/youtube/v3";

  async fn get<T: DeserializeOwned>(
    &self,
    resource: &str,
    query: &[(&'static str, String)],
  ) -> Result<T> {
    let url = format!("{}/{resource}", self.base_url.trim_end_matches('/'));

    let response = self
      .client
      .get(&url)
      .header(Self::API_KEY_HEADER, &self.api_key)
      .query(query)
      .send()
      .await
      .map_err(reqwest::Error::without_url)
      .with_context(|| format!("request to {url} failed"))?;

    let status = response.status();

    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      bail!(ApiErrorResponse::describe(status, &body));
    }

    response
      .json::<T>()
      .await
      .map_err(reqwest::Error::without_url)
      .with_context(|| format!("could not decode response from {url}"))
  }

  pub(crate) fn new(api_key: String, base_url: String) -> Self {
    Self {
      api_key,
      base_url,
      client: reqwest::Client::new(),
    }
  }

  fn reply_query(
    parent_id: &str,
    page_size: usize,
    page_token: Option<&str>,
  ) -> Vec<(&'static str, String)> {
    let mut query = vec![
      ("part", "snippet".to_string()),
      ("parentId", parent_id.to_string()),
      ("maxResults", page_size.clamp(1, PAGE_SIZE_CAP).to_string()),
    ];

    if let Some(token) = page_token {
      query.push(("pageToken", token.to_string()));
    }

    query
  }

  fn thread_query(
    video_id: &str,
    page_size: usize,
    order: Order,
    expansion: Expansion,
    page_token: Option<&str>,
  ) -> Vec<(&'static str, String)> {
    let part = if expansion.includes_replies() {
      "snippet,replies"
    } else {
      "snippet"
    };

    let mut query = vec![
      ("part", part.to_string()),
      ("videoId", video_id.to_string()),
      ("maxResults", page_size.clamp(1, PAGE_SIZE_CAP).to_string()),
      ("order", order.as_str().to_string()),
    ];

    if let Some(token) = page_token {
      query.push(("pageToken", token.to_string()));
    }

    query
  }
}

impl CommentApi for Client {
  async fn fetch_reply_page(
    &self,
    parent_id: &str,
    page_size: usize,
    page_token: Option<&str>,
  ) -> Result<ReplyPage> {
    self
      .get("comments", &Self::reply_query(parent_id, page_size, page_token))
      .await
  }

  async fn fetch_thread_page(
    &self,
    video_id: &str,
    page_size: usize,
    order: Order,
    expansion: Expansion,
    page_token: Option<&str>,
  ) -> Result<ThreadPage> {
    self
      .get(
        "commentThreads",
        &Self::thread_query(video_id, page_size, order, expansion, page_token),
      )
      .await
  }
}
