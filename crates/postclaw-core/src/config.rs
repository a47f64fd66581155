//! PostClaw configuration system.
//!
//! One explicit struct, built once at startup and passed into every
//! component. Loadable from a TOML file or from the process environment
//! (the variables the external scheduler sets as secrets).

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PostClawError, Result};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostClawConfig {
    /// IANA zone used to derive "today" for the posting cadence.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Trigger spec this invocation was started from, compared verbatim
    /// against the two canonical entries. Empty for ad-hoc runs.
    #[serde(default)]
    pub cron_schedule: String,
    /// Path to the topic table.
    #[serde(default = "default_topics_csv")]
    pub topics_csv: String,
    /// ISO date the every-2nd-day cadence counts from.
    #[serde(default = "default_anchor_date")]
    pub anchor_date: String,
    #[serde(default)]
    pub linkedin: LinkedInConfig,
    #[serde(default)]
    pub ntfy: NtfyConfig,
}

fn default_timezone() -> String {
    "America/Toronto".into()
}
fn default_topics_csv() -> String {
    "topics.csv".into()
}
fn default_anchor_date() -> String {
    "2025-09-08".into()
}

impl Default for PostClawConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            cron_schedule: String::new(),
            topics_csv: default_topics_csv(),
            anchor_date: default_anchor_date(),
            linkedin: LinkedInConfig::default(),
            ntfy: NtfyConfig::default(),
        }
    }
}

impl PostClawConfig {
    /// Load config from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PostClawError::Config(format!("failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| PostClawError::Config(format!("failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Build config from the process environment.
    pub fn from_env() -> Self {
        Self {
            timezone: env_or("TIMEZONE", &default_timezone()),
            cron_schedule: env_or("CRON_SCHEDULE", ""),
            topics_csv: env_or("TOPICS_CSV", &default_topics_csv()),
            anchor_date: env_or("ANCHOR_DATE", &default_anchor_date()),
            linkedin: LinkedInConfig {
                client_id: env_or("LINKEDIN_CLIENT_ID", ""),
                client_secret: env_or("LINKEDIN_CLIENT_SECRET", ""),
                refresh_token: env_or("LINKEDIN_REFRESH_TOKEN", ""),
                author_urn: env_or("LINKEDIN_MEMBER_URN", ""),
                api_version: env_or("LINKEDIN_VERSION", &default_api_version()),
                oauth_url: env_or("LINKEDIN_OAUTH_URL", &default_oauth_url()),
                api_url: env_or("LINKEDIN_API_URL", &default_api_url()),
            },
            ntfy: NtfyConfig {
                base_url: env_or("NTFY_URL", &default_ntfy_base()),
                topic: env_or("NTFY_TOPIC", ""),
            },
        }
    }

    /// Parsed anchor date.
    pub fn anchor(&self) -> Result<NaiveDate> {
        self.anchor_date.parse().map_err(|e| {
            PostClawError::Config(format!("invalid ANCHOR_DATE '{}': {e}", self.anchor_date))
        })
    }

    /// Parsed IANA timezone.
    pub fn tz(&self) -> Result<Tz> {
        self.timezone.parse().map_err(|e| {
            PostClawError::Config(format!("invalid TIMEZONE '{}': {e}", self.timezone))
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// LinkedIn API credentials and endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedInConfig {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default)]
    pub refresh_token: String,
    /// Author identity, e.g. `urn:li:person:XXXXXXXX`.
    #[serde(default)]
    pub author_urn: String,
    /// YYYYMM version header value; keep recent.
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_oauth_url")]
    pub oauth_url: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_version() -> String {
    "202507".into()
}
fn default_oauth_url() -> String {
    "https://www.linkedin.com/oauth/v2/accessToken".into()
}
fn default_api_url() -> String {
    "https://api.linkedin.com/rest/posts".into()
}

impl Default for LinkedInConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            refresh_token: String::new(),
            author_urn: String::new(),
            api_version: default_api_version(),
            oauth_url: default_oauth_url(),
            api_url: default_api_url(),
        }
    }
}

/// ntfy push-notification relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NtfyConfig {
    #[serde(default = "default_ntfy_base")]
    pub base_url: String,
    /// Destination topic; empty disables notifications.
    #[serde(default)]
    pub topic: String,
}

fn default_ntfy_base() -> String {
    "https://ntfy.sh".into()
}

impl Default for NtfyConfig {
    fn default() -> Self {
        Self {
            base_url: default_ntfy_base(),
            topic: String::new(),
        }
    }
}
