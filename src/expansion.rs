#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Expansion {
  Flat,
  WithReplies,
}

impl Expansion {
  pub(crate) fn columns(self) -> &'static [&'static str] {
    match self {
      Self::Flat => &[
        "author",
        "comment",
        "like_count",
        "published_at",
        "updated_at",
      ],
      Self::WithReplies => &[
        "level",
        "author",
        "comment",
        "like_count",
        "published_at",
        "updated_at",
        "parent_id",
        "comment_id",
      ],
    }
  }

  pub(crate) fn includes_replies(self) -> bool {
    matches!(self, Self::WithReplies)
  }
}
