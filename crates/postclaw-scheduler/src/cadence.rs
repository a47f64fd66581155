//! Posting cadence — every-2nd-day gate, window alternation, topic rotation.
//! All functions are pure date arithmetic against the fixed anchor date.

use chrono::NaiveDate;
use postclaw_core::error::{PostClawError, Result};
use postclaw_core::types::Window;

/// Whole days from anchor to today (negative before the anchor).
fn days_since_anchor(today: NaiveDate, anchor: NaiveDate) -> i64 {
    (today - anchor).num_days()
}

/// True on the anchor date and every 2nd day after it.
pub fn is_posting_day(today: NaiveDate, anchor: NaiveDate) -> bool {
    let delta = days_since_anchor(today, anchor);
    delta >= 0 && delta % 2 == 0
}

/// 0-based posting occasion number: floor of days-since-anchor / 2.
pub fn occasion(today: NaiveDate, anchor: NaiveDate) -> i64 {
    days_since_anchor(today, anchor).div_euclid(2)
}

/// Window for today — alternates each posting occasion, morning first.
pub fn choose_window(today: NaiveDate, anchor: NaiveDate) -> Window {
    if occasion(today, anchor).rem_euclid(2) == 0 {
        Window::Morning
    } else {
        Window::Afternoon
    }
}

/// Round-robin topic index for today's occasion. The table is reused
/// cyclically, advancing one step per posting occasion.
pub fn pick_topic_index(today: NaiveDate, anchor: NaiveDate, count: usize) -> Result<usize> {
    if count == 0 {
        return Err(PostClawError::Topics("topic table is empty".into()));
    }
    Ok(occasion(today, anchor).rem_euclid(count as i64) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const ANCHOR: (i32, u32, u32) = (2025, 9, 8);

    fn anchor() -> NaiveDate {
        date(ANCHOR.0, ANCHOR.1, ANCHOR.2)
    }

    #[test]
    fn anchor_day_is_first_occasion() {
        let today = anchor();
        assert!(is_posting_day(today, anchor()));
        assert_eq!(occasion(today, anchor()), 0);
        assert_eq!(choose_window(today, anchor()), Window::Morning);
        assert_eq!(pick_topic_index(today, anchor(), 7).unwrap(), 0);
    }

    #[test]
    fn second_occasion_is_afternoon() {
        let today = date(2025, 9, 10);
        assert!(is_posting_day(today, anchor()));
        assert_eq!(occasion(today, anchor()), 1);
        assert_eq!(choose_window(today, anchor()), Window::Afternoon);
        assert_eq!(pick_topic_index(today, anchor(), 7).unwrap(), 1);
    }

    #[test]
    fn odd_days_are_skipped() {
        assert!(!is_posting_day(date(2025, 9, 9), anchor()));
        assert!(!is_posting_day(date(2025, 9, 11), anchor()));
    }

    #[test]
    fn days_before_anchor_are_skipped() {
        assert!(!is_posting_day(date(2025, 9, 6), anchor()));
        assert!(!is_posting_day(date(2025, 9, 7), anchor()));
    }

    #[test]
    fn posting_days_are_exactly_even_deltas() {
        for offset in 0..60 {
            let today = anchor() + chrono::Duration::days(offset);
            assert_eq!(is_posting_day(today, anchor()), offset % 2 == 0);
        }
    }

    #[test]
    fn windows_alternate_between_consecutive_occasions() {
        for n in 0..30 {
            let today = anchor() + chrono::Duration::days(n * 2);
            let next = anchor() + chrono::Duration::days((n + 1) * 2);
            assert_ne!(
                choose_window(today, anchor()),
                choose_window(next, anchor())
            );
        }
    }

    #[test]
    fn topic_rotation_covers_every_index_twice() {
        let count = 5;
        let mut hits = vec![0u32; count];
        for n in 0..(2 * count as i64) {
            let today = anchor() + chrono::Duration::days(n * 2);
            hits[pick_topic_index(today, anchor(), count).unwrap()] += 1;
        }
        assert!(hits.iter().all(|&h| h == 2));
    }

    #[test]
    fn empty_table_is_an_error() {
        assert!(pick_topic_index(anchor(), anchor(), 0).is_err());
    }
}
