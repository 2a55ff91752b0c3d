//! Logging facade with named loggers, a live entry stream and scoped timing.
//!
//! # Architecture Overview
//!
//! ```text
//!   component ──▶ Logger ──log──▶ LoggerService ──publish──▶ Entries ──▶ subscribers
//!                  │  ▲                 │                     (level >= threshold,
//!                  │  └── is_*_enabled ─┘                      checked per entry)
//!                  │
//!                  └── perf() ──▶ PerformanceBlock ──drop──▶ one Perf entry
//!
//!   ambient::current() ──▶ installed service, or the null service by default
//! ```
//!
//! Components normally receive a [`SharedService`] or [`SharedLogger`] from
//! whoever builds them. The [`ambient`] slot exists for code that cannot be
//! handed one.

// Core model
pub mod error;
pub mod model;

// Loggers and services
pub mod logger;
pub mod service;

// Cross-cutting concerns
pub mod ambient;
pub mod config;
pub mod observability;

pub use config::LoggingConfig;
pub use error::{LoggingError, LoggingResult};
pub use logger::{Logger, PerformanceBlock, SharedLogger};
pub use model::{LogEntry, LogLevel};
pub use service::{
    DefaultLoggerService, Entries, EntryReceiver, LoggerService, LoggerServiceExt,
    NullLoggerService, SharedService, Subscription,
};
