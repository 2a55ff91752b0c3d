//! End-to-end behavior of the entry stream.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use ambient_log::{
    log_debug, log_info, log_warn, DefaultLoggerService, LogLevel, Logger, LoggerService,
};

mod common;
use common::Collector;

#[test]
fn test_threshold_determines_which_entries_tick() {
    let service = DefaultLoggerService::new();
    let logger = service.logger("threshold::test").unwrap();
    let (collector, _sub) = Collector::attach(&service.entries());

    logger.debug("Expected 1");
    logger.info("Expected 2");
    service.set_threshold(LogLevel::Info);
    logger.debug("NOT expected");
    logger.info("Expected 3");
    logger.warn("Expected 4");
    service.set_threshold(LogLevel::Perf);
    logger.info("NOT expected");
    logger.perf("Expected 5").complete();
    service.set_threshold(LogLevel::Warn);
    logger.perf("NOT expected").complete();
    logger.warn("Expected 6");
    service.set_threshold(LogLevel::Error);
    logger.warn("NOT expected");
    logger.error("Expected 7");
    service.set_threshold(LogLevel::None);
    logger.error("NOT expected");

    let messages = collector.messages();
    assert_eq!(messages.len(), 7);
    assert_eq!(messages[0], "Expected 1");
    assert_eq!(messages[1], "Expected 2");
    assert_eq!(messages[2], "Expected 3");
    assert_eq!(messages[3], "Expected 4");
    assert!(messages[4].starts_with("Expected 5 ["));
    assert_eq!(messages[5], "Expected 6");
    assert_eq!(messages[6], "Expected 7");
}

#[test]
fn test_entries_from_several_loggers_keep_order() {
    let service = DefaultLoggerService::new();
    let (collector, _sub) = Collector::attach(&service.entries());
    let first = service.logger("First").unwrap();
    let second = service.logger("Second").unwrap();

    first.debug("Debug message.");
    first.warn("Some warning.");
    second.info("Something from logger 2.");
    first.debug("Another debug message.");
    second.error("Something bad happened.");

    let entries = collector.entries();
    let summary: Vec<(&str, LogLevel, &str)> = entries
        .iter()
        .map(|e| (e.name(), e.level(), e.message()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("First", LogLevel::Debug, "Debug message."),
            ("First", LogLevel::Warn, "Some warning."),
            ("Second", LogLevel::Info, "Something from logger 2."),
            ("First", LogLevel::Debug, "Another debug message."),
            ("Second", LogLevel::Error, "Something bad happened."),
        ]
    );
}

#[test]
fn test_raw_log_is_gated_at_the_stream() {
    let service = DefaultLoggerService::with_threshold(LogLevel::Info);
    let logger = service.logger("raw").unwrap();
    let (collector, _sub) = Collector::attach(&service.entries());

    // log() bypasses the helpers' enablement check; the stream still filters
    logger.log(LogLevel::Debug, "below");
    logger.log(LogLevel::Info, "at");

    assert_eq!(collector.messages(), vec!["at"]);
}

#[test]
fn test_no_replay_for_late_subscribers() {
    let service = DefaultLoggerService::new();
    let logger = service.logger("late").unwrap();

    logger.info("before");
    let (collector, _sub) = Collector::attach(&service.entries());
    logger.info("after");

    assert_eq!(collector.messages(), vec!["after"]);
}

#[test]
fn test_unsubscribe_does_not_affect_others() {
    let service = DefaultLoggerService::new();
    let logger = service.logger("fanout").unwrap();
    let (kept, _kept_sub) = Collector::attach(&service.entries());
    let (dropped, dropped_sub) = Collector::attach(&service.entries());

    logger.info("one");
    dropped_sub.unsubscribe();
    logger.info("two");

    assert_eq!(kept.messages(), vec!["one", "two"]);
    assert_eq!(dropped.messages(), vec!["one"]);
    assert_eq!(service.subscriber_count(), 1);
}

#[test]
fn test_macros_format_only_enabled_levels() {
    let service = DefaultLoggerService::with_threshold(LogLevel::Info);
    let logger = service.logger("macros").unwrap();
    let (collector, _sub) = Collector::attach(&service.entries());

    log_debug!(logger, "skipped {}", 1);
    log_info!(logger, "copied {} of {}", 3, 4);
    let err = std::io::Error::other("permission denied");
    log_warn!(logger, err: err, "could not open {}", "a.txt");

    assert_eq!(
        collector.messages(),
        vec!["copied 3 of 4", "could not open a.txt: permission denied"]
    );
}

#[test]
fn test_concurrent_publishers_and_subscribers() {
    let service = DefaultLoggerService::new();
    let (collector, _sub) = Collector::attach(&service.entries());
    let churned = Arc::new(AtomicUsize::new(0));

    std::thread::scope(|scope| {
        for worker in 0..4 {
            let service = &service;
            scope.spawn(move || {
                let logger = service.logger(&format!("worker-{worker}")).unwrap();
                for i in 0..250 {
                    logger.info(&format!("{worker}:{i}"));
                }
            });
        }

        let service = &service;
        let churned = churned.clone();
        scope.spawn(move || {
            for _ in 0..100 {
                let sub = service.entries().subscribe(|_| {});
                churned.fetch_add(1, Ordering::Relaxed);
                drop(sub);
            }
        });
    });

    assert_eq!(collector.len(), 1000);
    assert_eq!(churned.load(Ordering::Relaxed), 100);

    // per-thread order survives interleaving
    for worker in 0..4 {
        let prefix = format!("{worker}:");
        let sequence: Vec<usize> = collector
            .messages()
            .iter()
            .filter_map(|m| m.strip_prefix(&prefix).map(|n| n.parse().unwrap()))
            .collect();
        assert_eq!(sequence, (0..250).collect::<Vec<_>>());
    }
}

#[tokio::test]
async fn test_receiver_yields_entries() {
    let service = DefaultLoggerService::new();
    let logger = service.logger("async").unwrap();
    let mut rx = service.entries().receiver();

    let producer = {
        let logger = logger.clone();
        tokio::spawn(async move {
            logger.info("from task");
        })
    };
    producer.await.unwrap();

    let entry = tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("entry should arrive")
        .expect("stream is open");
    assert_eq!(entry.message(), "from task");
    assert_eq!(entry.name(), "async");
}
