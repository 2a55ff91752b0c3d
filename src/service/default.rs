//! The standard logger service.

use std::sync::Arc;

use dashmap::DashMap;

use crate::config::LoggingConfig;
use crate::error::{LoggingError, LoggingResult};
use crate::logger::{Logger, SharedLogger};
use crate::model::{LogEntry, LogLevel};
use crate::service::broadcast::{Broadcast, Entries};
use crate::service::{LoggerService, Threshold};

/// Threshold of a freshly built service.
pub const DEFAULT_THRESHOLD: LogLevel = LogLevel::Debug;

/// Logger service that broadcasts entries to in-process subscribers.
///
/// Loggers are registered on first request and kept for the life of the
/// service. Registration is insert-if-absent, so concurrent first requests for
/// one name still end up sharing a single handle.
pub struct DefaultLoggerService {
    threshold: Arc<Threshold>,
    broadcast: Arc<Broadcast>,
    loggers: DashMap<String, SharedLogger>,
}

impl DefaultLoggerService {
    /// Create a service with the default threshold.
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(threshold: LogLevel) -> Self {
        Self {
            threshold: Arc::new(Threshold::new(threshold)),
            broadcast: Arc::new(Broadcast::new()),
            loggers: DashMap::new(),
        }
    }

    /// Create a service configured from `config`.
    pub fn from_config(config: &LoggingConfig) -> Self {
        Self::with_threshold(config.threshold)
    }

    /// Number of registered loggers.
    pub fn logger_count(&self) -> usize {
        self.loggers.len()
    }

    /// Number of observers currently attached to the entry stream.
    pub fn subscriber_count(&self) -> usize {
        self.broadcast.subscriber_count()
    }
}

impl Default for DefaultLoggerService {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerService for DefaultLoggerService {
    fn threshold(&self) -> LogLevel {
        self.threshold.get()
    }

    fn set_threshold(&self, level: LogLevel) {
        self.threshold.set(level);
    }

    fn entries(&self) -> Entries {
        Entries::live(self.broadcast.clone(), self.threshold.clone())
    }

    fn logger(&self, name: &str) -> LoggingResult<SharedLogger> {
        if name.trim().is_empty() {
            return Err(LoggingError::InvalidLoggerName);
        }

        if let Some(existing) = self.loggers.get(name) {
            return Ok(existing.value().clone());
        }

        let logger = self
            .loggers
            .entry(name.to_string())
            .or_insert_with(|| {
                tracing::debug!(logger = name, "registering logger");
                Arc::new(ServiceLogger {
                    name: name.to_string(),
                    threshold: self.threshold.clone(),
                    broadcast: self.broadcast.clone(),
                })
            })
            .value()
            .clone();
        Ok(logger)
    }
}

impl std::fmt::Debug for DefaultLoggerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultLoggerService")
            .field("threshold", &self.threshold())
            .field("loggers", &self.logger_count())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Handle created by [`DefaultLoggerService`].
///
/// Holds the service's shared threshold and broadcast rather than the service
/// itself, so the registry never forms a reference cycle.
struct ServiceLogger {
    name: String,
    threshold: Arc<Threshold>,
    broadcast: Arc<Broadcast>,
}

impl Logger for ServiceLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        self.threshold.allows(level)
    }

    fn log(&self, level: LogLevel, message: &str) {
        if level == LogLevel::None {
            tracing::warn!(logger = %self.name, "discarding entry logged at the none level");
            return;
        }
        let entry = LogEntry::now(self.name.as_str(), level, message);
        self.broadcast.publish(&entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::service::LoggerServiceExt;

    struct Widget;
    struct Container<T>(#[allow(dead_code)] T);

    #[test]
    fn test_default_threshold() {
        let service = DefaultLoggerService::new();
        assert_eq!(service.threshold(), LogLevel::Debug);
    }

    #[test]
    fn test_threshold_can_be_set() {
        let service = DefaultLoggerService::new();
        service.set_threshold(LogLevel::Error);
        assert_eq!(service.threshold(), LogLevel::Error);
        service.set_threshold(LogLevel::Info);
        assert_eq!(service.threshold(), LogLevel::Info);
    }

    #[test]
    fn test_enablement_matrix() {
        let service = DefaultLoggerService::new();
        let all = [
            LogLevel::Verbose,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Perf,
            LogLevel::Warn,
            LogLevel::Error,
            LogLevel::None,
        ];

        for threshold in all {
            service.set_threshold(threshold);
            assert_eq!(service.is_verbose_enabled(), threshold <= LogLevel::Verbose);
            assert_eq!(service.is_debug_enabled(), threshold <= LogLevel::Debug);
            assert_eq!(service.is_info_enabled(), threshold <= LogLevel::Info);
            assert_eq!(service.is_perf_enabled(), threshold <= LogLevel::Perf);
            assert_eq!(service.is_warn_enabled(), threshold <= LogLevel::Warn);
            assert_eq!(service.is_error_enabled(), threshold != LogLevel::None);
        }
    }

    #[test]
    fn test_same_name_same_logger() {
        let service = DefaultLoggerService::new();
        let a = service.logger("Name").unwrap();
        let b = service.logger("Name").unwrap();

        assert_eq!(a.name(), "Name");
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(service.logger_count(), 1);
    }

    #[test]
    fn test_logger_for_type() {
        let service = DefaultLoggerService::new();
        let logger = service.logger_for::<Widget>().unwrap();
        assert_eq!(logger.name(), std::any::type_name::<Widget>());

        let again = service.logger_for::<Widget>().unwrap();
        assert!(Arc::ptr_eq(&logger, &again));
    }

    #[test]
    fn test_generic_instantiations_share_logger() {
        let service = DefaultLoggerService::new();
        let a = service.logger_for::<Container<i32>>().unwrap();
        let b = service.logger_for::<Container<String>>().unwrap();

        assert!(Arc::ptr_eq(&a, &b));
        assert!(!a.name().contains('<'));
    }

    #[test]
    fn test_distinct_tuple_types_get_distinct_loggers() {
        let service = DefaultLoggerService::new();
        let a = service.logger_for::<(Container<i32>, u8)>().unwrap();
        let b = service.logger_for::<(Container<String>, bool)>().unwrap();

        assert!(!Arc::ptr_eq(&a, &b));
        assert!(a.name().starts_with('(') && a.name().ends_with(", u8)"));
    }

    #[test]
    fn test_rejects_blank_names() {
        let service = DefaultLoggerService::new();
        assert!(matches!(service.logger(""), Err(LoggingError::InvalidLoggerName)));
        assert!(matches!(service.logger("  "), Err(LoggingError::InvalidLoggerName)));
        assert_eq!(service.logger_count(), 0);
    }

    #[test]
    fn test_existing_handles_follow_threshold() {
        let service = DefaultLoggerService::new();
        let logger = service.logger("handle").unwrap();
        assert!(logger.is_debug_enabled());

        service.set_threshold(LogLevel::Info);
        assert!(!logger.is_debug_enabled());
        assert!(logger.is_info_enabled());

        service.set_threshold(LogLevel::None);
        assert!(!logger.is_error_enabled());
    }

    #[test]
    fn test_log_stamps_entry() {
        let service = DefaultLoggerService::new();
        let logger = service.logger("stamp").unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let _sub = service
            .entries()
            .subscribe(move |entry| sink.lock().unwrap().push(entry.clone()));

        logger.log(LogLevel::Warn, "careful");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].name(), "stamp");
        assert_eq!(seen[0].level(), LogLevel::Warn);
        assert_eq!(seen[0].message(), "careful");
        assert_eq!(seen[0].thread_id(), crate::model::current_thread_id());
    }

    #[test]
    fn test_none_level_is_discarded() {
        let service = DefaultLoggerService::with_threshold(LogLevel::Verbose);
        let logger = service.logger("none").unwrap();
        let mut rx = service.entries().receiver();

        logger.log(LogLevel::None, "never");
        assert!(rx.try_recv().is_none());
    }

    #[test]
    fn test_from_config() {
        let config = LoggingConfig {
            threshold: LogLevel::Warn,
        };
        let service = DefaultLoggerService::from_config(&config);
        assert_eq!(service.threshold(), LogLevel::Warn);
    }

    #[test]
    fn test_concurrent_registration_converges() {
        let service = DefaultLoggerService::new();
        let handles: Vec<SharedLogger> = std::thread::scope(|scope| {
            let workers: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| service.logger("shared").unwrap()))
                .collect();
            workers.into_iter().map(|w| w.join().unwrap()).collect()
        });

        assert_eq!(service.logger_count(), 1);
        for handle in &handles {
            assert!(Arc::ptr_eq(handle, &handles[0]));
        }
    }
}
