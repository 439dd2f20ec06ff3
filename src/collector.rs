use super::*;

pub(crate) struct Collector<'a, A> {
  api: &'a A,
  expansion: Expansion,
  order: Order,
}

impl<'a, A: CommentApi> Collector<'a, A> {
  pub(crate) async fn collect(
    &self,
    video_id: &str,
    max_top_level: usize,
  ) -> Result<Vec<CommentRecord>> {
    let mut records = Vec::new();

    let mut emitted = 0;

    let mut page_token: Option<String> = None;

    while emitted < max_top_level {
      let remaining = max_top_level - emitted;

      let page_size = remaining.min(PAGE_SIZE_CAP);

      log::debug!(
        "fetching thread page for {video_id} (size {page_size}, token {page_token:?})"
      );

      let page = self
        .api
        .fetch_thread_page(
          video_id,
          page_size,
          self.order,
          self.expansion,
          page_token.as_deref(),
        )
        .await
        .with_context(|| {
          format!("failed to fetch comment threads for video {video_id}")
        })?;

      for thread in page.items.iter().take(remaining) {
        self.expand_thread(thread, &mut records).await;
        emitted += 1;
      }

      match page.next_page_token {
        Some(token) => page_token = Some(token),
        None => break,
      }
    }

    log::info!(
      "collected {} records ({emitted} top-level) for {video_id}",
      records.len()
    );

    Ok(records)
  }

  async fn expand_thread(
    &self,
    thread: &CommentThread,
    records: &mut Vec<CommentRecord>,
  ) {
    let top_level = thread.top_level_comment();

    records.push(CommentRecord::top_level(top_level));

    if !self.expansion.includes_replies() {
      return;
    }

    let inline = thread.inline_replies();

    for reply in inline {
      records.push(CommentRecord::reply(reply, &top_level.id));
    }

    if thread.total_reply_count() <= inline.len() as u64 {
      return;
    }

    let inline_ids = inline
      .iter()
      .map(|reply| reply.id.as_str())
      .collect::<HashSet<_>>();

    if let Err(error) = self
      .fetch_remaining_replies(&top_level.id, &inline_ids, records)
      .await
    {
      log::warn!("skipping remaining replies to {}: {error:#}", top_level.id);
    }
  }

  // Reply pages are trusted not to repeat ids among themselves; only the
  // inline snapshot is deduplicated against.
  async fn fetch_remaining_replies(
    &self,
    parent_id: &str,
    inline_ids: &HashSet<&str>,
    records: &mut Vec<CommentRecord>,
  ) -> Result {
    let mut page_token: Option<String> = None;

    loop {
      log::debug!("fetching reply page for {parent_id} (token {page_token:?})");

      let page = self
        .api
        .fetch_reply_page(parent_id, PAGE_SIZE_CAP, page_token.as_deref())
        .await
        .with_context(|| format!("failed to fetch replies to {parent_id}"))?;

      records.extend(
        page
          .items
          .iter()
          .filter(|reply| !inline_ids.contains(reply.id.as_str()))
          .map(|reply| CommentRecord::reply(reply, parent_id)),
      );

      match page.next_page_token {
        Some(token) => page_token = Some(token),
        None => return Ok(()),
      }
    }
  }

  pub(crate) fn new(api: &'a A, expansion: Expansion, order: Order) -> Self {
    Self {
      api,
      expansion,
      order,
    }
  }
}
