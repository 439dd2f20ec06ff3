use super::*;

#[derive(Debug, Parser)]
#[command(
  name = "ytc",
  version,
  about = "Extract YouTube comments and save them to CSV"
)]
pub(crate) struct Arguments {
  /// YouTube Data API key
  pub(crate) api_key: String,
  /// API endpoint to query
  #[arg(
    long,
    env = "YOUTUBE_API_BASE_URL",
    default_value = Client::DEFAULT_BASE_URL
  )]
  pub(crate) base_url: String,
  /// Maximum number of top-level comments to extract
  #[arg(
    long,
    default_value_t = 100,
    value_parser = clap::value_parser!(u32).range(1..)
  )]
  pub(crate) max_comments: u32,
  /// Only extract top-level comments
  #[arg(long)]
  pub(crate) no_replies: bool,
  /// Order in which comment threads are requested
  #[arg(long, value_enum, default_value_t = Order::Relevance)]
  pub(crate) order: Order,
  /// Output CSV filename [default: youtube_comments_<VIDEO_ID>.csv]
  #[arg(long, short)]
  pub(crate) output: Option<PathBuf>,
  /// YouTube video ID
  pub(crate) video_id: String,
}

impl Arguments {
  pub(crate) fn expansion(&self) -> Expansion {
    if self.no_replies {
      Expansion::Flat
    } else {
      Expansion::WithReplies
    }
  }

  pub(crate) fn output_path(&self) -> PathBuf {
    self.output.clone().unwrap_or_else(|| {
      PathBuf::from(format!("youtube_comments_{}.csv", self.video_id))
    })
  }
}
