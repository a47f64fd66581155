//! Post composition — a fixed template over one topic row, hard-capped to
//! the platform budget. The hashtag line is always appended whole; only the
//! body ahead of it gets cut.

use postclaw_core::types::{ComposedPost, TopicRow};

/// Hard cap on the rendered post, in characters. LinkedIn's official limit
/// is 3000; stay under it with margin.
pub const MAX_POST_LEN: usize = 2900;

/// Render a topic row into the fixed post template.
///
/// The cut is a plain character cut with no word-boundary awareness.
pub fn compose_post(row: &TopicRow) -> ComposedPost {
    let opening = format!("{}: a practical playbook.\n", row.title);
    let mut points = String::new();
    for bullet in &row.outline {
        points.push_str("\n• ");
        points.push_str(bullet);
    }
    let body = format!(
        "{opening}Here’s a crisp checklist from the trenches to move you forward:{points}\n\n\
         Pro tip: Start small, measure impact, and iterate.\n\n\
         Question: {}",
        row.cta
    );
    let body = body.trim();

    let budget = MAX_POST_LEN.saturating_sub(2 + row.hashtags.chars().count());
    let truncated: String = body.chars().take(budget).collect();
    ComposedPost {
        text: format!("{truncated}\n\n{}", row.hashtags),
    }
}
