//! Error taxonomy for the posting pipeline.
//!
//! Upstream HTTP failures keep the raw status code and body text so the
//! operator sees exactly what the platform returned.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PostClawError>;

#[derive(Debug, Error)]
pub enum PostClawError {
    /// Missing or invalid configuration (credentials, identity, zone).
    #[error("config error: {0}")]
    Config(String),

    /// Token exchange rejected, or the response carried no usable token.
    #[error("failed to refresh token: {status} {body}")]
    Auth { status: u16, body: String },

    /// Publish endpoint returned something other than 201/202.
    #[error("LinkedIn post failed: {status} {body}")]
    Publish { status: u16, body: String },

    /// Transport-level failure on an outbound call.
    #[error("channel error: {0}")]
    Channel(String),

    /// Topic table could not be read or is unusable.
    #[error("topics error: {0}")]
    Topics(String),
}
