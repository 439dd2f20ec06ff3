use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
  pub(crate) error: ApiError,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiError {
  pub(crate) code: Option<u16>,
  pub(crate) message: String,
}

impl ApiErrorResponse {
  pub(crate) fn describe(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<Self>(body) {
      Ok(response) => {
        let code = response.error.code.unwrap_or(status.as_u16());
        format!("API returned {code}: {}", response.error.message)
      }
      Err(_) => format!("API returned {status}"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn describe_uses_api_message_when_present() {
    let body = r#"{
      "error": {
        "code": 403,
        "message": "The video identified by the videoId parameter has disabled comments.",
        "errors": [{"reason": "commentsDisabled"}]
      }
    }"#;

    assert_eq!(
      ApiErrorResponse::describe(StatusCode::FORBIDDEN, body),
      "API returned 403: The video identified by the videoId parameter has disabled comments."
    );
  }

  #[test]
  fn describe_falls_back_to_status_for_unparseable_body() {
    assert_eq!(
      ApiErrorResponse::describe(StatusCode::BAD_GATEWAY, "<html>oops</html>"),
      "API returned 502 Bad Gateway"
    );
  }
}
