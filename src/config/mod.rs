//! Configuration management.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → LoggingConfig
//!     → DefaultLoggerService::from_config
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so an empty file is valid
//! - Level names are lowercase; "warning" is accepted for warn
//! - The threshold stays mutable at runtime through the service

pub mod loader;
pub mod schema;

pub use loader::{load_config, parse_config};
pub use schema::LoggingConfig;
