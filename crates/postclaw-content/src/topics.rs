//! Topic table loading — a CSV with columns `title, outline, cta, hashtags`.
//! The `outline` field packs the bullet entries behind a `|` delimiter.

use postclaw_core::error::{PostClawError, Result};
use postclaw_core::types::TopicRow;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawTopicRow {
    title: String,
    outline: String,
    cta: String,
    hashtags: String,
}

impl RawTopicRow {
    fn into_topic(self) -> TopicRow {
        TopicRow {
            title: self.title.trim().to_string(),
            outline: self
                .outline
                .split('|')
                .map(|b| b.trim().to_string())
                .collect(),
            cta: self.cta.trim().to_string(),
            hashtags: self.hashtags.trim().to_string(),
        }
    }
}

/// Load every topic row, in file order.
pub fn load_topics(path: &Path) -> Result<Vec<TopicRow>> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| PostClawError::Topics(format!("failed to open {}: {e}", path.display())))?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let raw: RawTopicRow = record
            .map_err(|e| PostClawError::Topics(format!("bad row in {}: {e}", path.display())))?;
        rows.push(raw.into_topic());
    }
    Ok(rows)
}
