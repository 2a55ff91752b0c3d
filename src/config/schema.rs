//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::model::LogLevel;
use crate::service::default::DEFAULT_THRESHOLD;

/// Settings for building a logger service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level delivered to subscribers (verbose, debug, info, perf,
    /// warn, error, none).
    pub threshold: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}
