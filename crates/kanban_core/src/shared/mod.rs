//! Identity, time and text helpers shared by every core layer.
//!
//! # Invariants
//! - Ids are opaque strings; callers must never parse or reuse them.
//! - Timestamps are Unix epoch milliseconds (`i64`).

pub mod id;
pub mod text;
pub mod time;

pub use id::{new_id, Id};
pub use text::truncate_text;
pub use time::{format_relative_time, now_ms, TimestampMs};
