//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! service.entries()
//!     → bridge.rs (entry → tracing event, target "ambient_log")
//!     → whatever tracing subscriber the host installed
//! ```
//!
//! # Design Decisions
//! - The crate never installs a global subscriber; hosts own that choice
//! - The bridge is an ordinary subscription and stops when dropped
//! - Internal diagnostics (registry growth, ambient changes) use `tracing`
//!   directly and never go through a logger service

pub mod bridge;

pub use bridge::forward_to_tracing;
