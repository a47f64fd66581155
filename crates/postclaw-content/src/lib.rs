//! # PostClaw Content
//! The topic table and the post template that renders one row of it.

pub mod compose;
pub mod topics;

pub use compose::{MAX_POST_LEN, compose_post};
pub use topics::load_topics;
