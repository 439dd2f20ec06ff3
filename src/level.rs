#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Level {
  Reply,
  TopLevel,
}

impl Level {
  pub(crate) fn depth(self) -> u8 {
    match self {
      Self::Reply => 1,
      Self::TopLevel => 0,
    }
  }
}
