//! Invocation slot resolution — which window does this run believe it is in?
//!
//! The external scheduler triggers the binary from two fixed cron entries;
//! the declared `CRON_SCHEDULE` is compared verbatim against both. Ad-hoc
//! runs carry no spec and fall back to a UTC time-of-day cutoff so they
//! still resolve to a deterministic slot.

use chrono::{DateTime, Timelike, Utc};
use postclaw_core::types::Window;

/// Canonical morning trigger (12:00 UTC).
pub const MORNING_CRON: &str = "0 12 * * *";
/// Canonical afternoon trigger (17:00 UTC).
pub const AFTERNOON_CRON: &str = "0 17 * * *";

/// UTC hour separating morning from afternoon for manual runs.
const FALLBACK_CUTOFF_HOUR: u32 = 15;

/// Resolve the slot this invocation runs in.
pub fn invocation_slot(cron_schedule: &str, now_utc: DateTime<Utc>) -> Window {
    match cron_schedule.trim() {
        MORNING_CRON => Window::Morning,
        AFTERNOON_CRON => Window::Afternoon,
        other => {
            if !other.is_empty() {
                tracing::warn!("Unrecognized CRON_SCHEDULE '{other}'; falling back to time of day");
            }
            if now_utc.hour() < FALLBACK_CUTOFF_HOUR {
                Window::Morning
            } else {
                Window::Afternoon
            }
        }
    }
}
