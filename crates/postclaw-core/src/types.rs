//! Shared data model for the posting pipeline.

use serde::{Deserialize, Serialize};

/// One row of the topic table. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicRow {
    /// Post headline.
    pub title: String,
    /// Bullet entries, split from the `|`-delimited outline field.
    pub outline: Vec<String>,
    /// Closing question.
    pub cta: String,
    /// Trailing hashtag line, appended whole.
    pub hashtags: String,
}

/// One of the two daily posting windows. Windows alternate each posting
/// occasion: occasion 0 is morning, occasion 1 afternoon, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Window {
    Morning,
    Afternoon,
}

impl Window {
    /// Numeric index (0 = morning, 1 = afternoon).
    pub fn index(self) -> u8 {
        match self {
            Window::Morning => 0,
            Window::Afternoon => 1,
        }
    }

    /// Upper bound of the random in-window offset, in minutes.
    /// The morning trigger fires at 12:00 UTC with up to 5 hours of jitter,
    /// the afternoon trigger at 17:00 UTC with up to 4.
    pub fn max_offset_minutes(self) -> i64 {
        match self {
            Window::Morning => 300,
            Window::Afternoon => 240,
        }
    }
}

/// A rendered post, bounded to the platform character budget.
#[derive(Debug, Clone)]
pub struct ComposedPost {
    pub text: String,
}

/// Outcome of a successful publish call.
#[derive(Debug, Clone)]
pub struct PublishResult {
    /// Share URN from the `x-restli-id` response header; may be empty.
    pub post_urn: String,
    /// Feed URL built from the URN when one was returned.
    pub view_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_offsets() {
        assert_eq!(Window::Morning.max_offset_minutes(), 300);
        assert_eq!(Window::Afternoon.max_offset_minutes(), 240);
        assert_eq!(Window::Morning.index(), 0);
        assert_eq!(Window::Afternoon.index(), 1);
    }
}
