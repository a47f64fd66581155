//! # PostClaw Scheduler
//!
//! Pure date arithmetic that decides when a run is allowed to post.
//! No persisted state — everything derives from the anchor date, today's
//! date, and the trigger spec the process was invoked from.

pub mod cadence;
pub mod slot;

pub use cadence::{choose_window, is_posting_day, occasion, pick_topic_index};
pub use slot::{AFTERNOON_CRON, MORNING_CRON, invocation_slot};
