//! # PostClaw Channels
//! Outbound platform integrations: the LinkedIn publisher and the ntfy
//! notification relay.

pub mod linkedin;
pub mod ntfy;

pub use linkedin::LinkedInChannel;
pub use ntfy::NtfyNotifier;
