use super::*;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub(crate) enum Order {
  #[default]
  Relevance,
  Time,
}

impl Order {
  pub(crate) fn as_str(self) -> &'static str {
    match self {
      Self::Relevance => "relevance",
      Self::Time => "time",
    }
  }
}
