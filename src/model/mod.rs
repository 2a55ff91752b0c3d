//! Value types shared by every subsystem.
//!
//! # Responsibilities
//! - Define the ordered severity scale (level.rs)
//! - Define the immutable entry record (entry.rs)
//!
//! # Design Decisions
//! - Levels are `repr(u8)` so a threshold fits in an atomic
//! - Entries carry a rendered message, never deferred formatting

pub mod entry;
pub mod level;

pub use entry::{current_thread_id, LogEntry};
pub use level::LogLevel;
