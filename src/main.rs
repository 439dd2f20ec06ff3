use {
  anyhow::{Context, bail},
  api_comment::ApiComment,
  api_error::ApiErrorResponse,
  arguments::Arguments,
  chrono::{DateTime, SecondsFormat, Utc},
  clap::{Parser, ValueEnum},
  client::Client,
  collector::Collector,
  comment_api::CommentApi,
  comment_record::CommentRecord,
  comment_thread::CommentThread,
  crossterm::style::Stylize,
  expansion::Expansion,
  level::Level,
  order::Order,
  output::write_csv,
  reply_page::ReplyPage,
  reqwest::StatusCode,
  serde::{Deserialize, de::DeserializeOwned},
  std::{
    backtrace::BacktraceStatus,
    collections::HashSet,
    io::{self, IsTerminal},
    path::{Path, PathBuf},
    process,
  },
  thread_page::ThreadPage,
};

mod api_comment;
mod api_error;
mod arguments;
mod client;
mod collector;
mod comment_api;
mod comment_record;
mod comment_thread;
mod expansion;
mod level;
mod order;
mod output;
mod reply_page;
mod thread_page;

// Largest page the API will serve for either resource.
const PAGE_SIZE_CAP: usize = 100;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

async fn run() -> Result {
  let arguments = Arguments::parse();

  println!("Extracting comments from video: {}", arguments.video_id);
  println!("Maximum comments: {}", arguments.max_comments);

  let client = Client::new(arguments.api_key.clone(), arguments.base_url.clone());

  let expansion = arguments.expansion();

  let records = Collector::new(&client, expansion, arguments.order)
    .collect(&arguments.video_id, arguments.max_comments as usize)
    .await?;

  if records.is_empty() {
    bail!("no comments found or unable to retrieve comments");
  }

  let path = arguments.output_path();

  write_csv(&path, expansion, &records)
    .with_context(|| format!("error saving to {}", path.display()))?;

  println!(
    "Successfully saved {} comments to {}",
    records.len(),
    path.display()
  );

  Ok(())
}

#[tokio::main]
async fn main() {
  env_logger::Builder::from_env(
    env_logger::Env::default().default_filter_or("info"),
  )
  .init();

  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
