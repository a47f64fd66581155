//! The posting pipeline.
//!
//! State sequence per invocation:
//! gate check → (exit | wait → pre-notify → wait → publish → done).
//!
//! Waits are computed wake instants handed to the tokio timer, so a dropped
//! future cancels cleanly. There is no lock against a second invocation in
//! the same window — the external scheduler owns at-most-once triggering.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use postclaw_channels::{LinkedInChannel, NtfyNotifier};
use postclaw_content::{compose_post, load_topics};
use postclaw_core::config::PostClawConfig;
use postclaw_core::error::Result;
use postclaw_scheduler::{cadence, slot};
use rand::Rng;
use std::path::Path;

/// Minutes between the heads-up notification and the publish attempt.
const HEADS_UP_MINUTES: i64 = 10;
/// Characters of the composed post shown in the heads-up message.
const PREVIEW_CHARS: usize = 400;

/// Run one gated posting attempt. Returns Ok on a no-op gate miss as well
/// as on a published post; only real failures bubble up.
pub async fn run_pipeline(config: &PostClawConfig, dry_run: bool) -> Result<()> {
    let tz = config.tz()?;
    let anchor = config.anchor()?;
    let today = Utc::now().with_timezone(&tz).date_naive();

    let posting_day = cadence::is_posting_day(today, anchor);
    let window = cadence::choose_window(today, anchor);
    let this_slot = slot::invocation_slot(&config.cron_schedule, Utc::now());

    if dry_run {
        tracing::info!(
            "[dry-run] posting_day={posting_day}, window={window:?}, slot={this_slot:?}"
        );
        let rows = load_topics(Path::new(&config.topics_csv))?;
        let idx = cadence::pick_topic_index(today, anchor, rows.len())?;
        let planned = compose_post(&rows[idx]);
        tracing::info!("[dry-run] topic #{idx}: {}", rows[idx].title);
        tracing::info!("[dry-run] composed post:\n{}", planned.text);
        return Ok(());
    }

    if !posting_day {
        tracing::info!("Not a posting day; exiting");
        return Ok(());
    }
    if this_slot != window {
        tracing::info!("This slot ({this_slot:?}) is not today's window ({window:?}); exiting");
        return Ok(());
    }

    // Random offset inside the window; the heads-up lands 10 minutes
    // before the post.
    let max_offset = window.max_offset_minutes();
    let offset = rand::thread_rng().gen_range(0..=max_offset);
    let pre_offset = (offset - HEADS_UP_MINUTES).max(0);

    if pre_offset > 0 {
        tracing::info!("Waiting {pre_offset} minutes until pre-notify");
        sleep_until(Utc::now() + ChronoDuration::minutes(pre_offset)).await;
    }

    let rows = load_topics(Path::new(&config.topics_csv))?;
    let idx = cadence::pick_topic_index(today, anchor, rows.len())?;
    let row = &rows[idx];
    let planned = compose_post(row);

    let notifier = NtfyNotifier::new(config.ntfy.clone());
    let sched_time = Utc::now().with_timezone(&tz)
        + ChronoDuration::minutes(HEADS_UP_MINUTES + (offset - pre_offset));
    let preview: String = planned.text.chars().take(PREVIEW_CHARS).collect();
    notifier
        .send(
            "LinkedIn Auto-Post (10 min heads-up)",
            &format!(
                "Next post in ~10 minutes at {} \nTitle: {}\nPreview:\n\n{preview}…",
                sched_time.format("%Y-%m-%d %H:%M %Z"),
                row.title
            ),
            &["spiral_calendar", "memo"],
            4,
        )
        .await?;

    tracing::info!("Final {HEADS_UP_MINUTES}-minute wait before posting");
    sleep_until(Utc::now() + ChronoDuration::minutes(HEADS_UP_MINUTES)).await;

    let publisher = LinkedInChannel::new(config.linkedin.clone());
    match publisher.publish(&planned.text).await {
        Ok(result) => {
            let link = result
                .view_url
                .clone()
                .unwrap_or_else(|| result.post_urn.clone());
            notifier
                .send(
                    "LinkedIn Auto-Post (Success)",
                    &format!("Published: {}\n{link}", row.title),
                    &["white_check_mark", "link"],
                    3,
                )
                .await?;
            tracing::info!("Done: '{}' {:?}", result.post_urn, result.view_url);
            Ok(())
        }
        Err(e) => {
            notifier
                .send(
                    "LinkedIn Auto-Post (Failed)",
                    &format!("Error: {e}"),
                    &["x", "warning"],
                    5,
                )
                .await?;
            Err(e)
        }
    }
}

/// Suspend until the given instant. Past instants return immediately.
async fn sleep_until(wake_at: DateTime<Utc>) {
    if let Ok(remaining) = (wake_at - Utc::now()).to_std() {
        tokio::time::sleep(remaining).await;
    }
}
