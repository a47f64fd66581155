//! # PostClaw Agent
//! Sequences one gated posting run: cadence check, in-window jitter,
//! heads-up notification, publish, outcome notification.

pub mod pipeline;

pub use pipeline::run_pipeline;
