//! Custom logging module.
//!
//! This module provides a custom logger implementation that captures log entries
//! and forwards them to a callback, which the app uses to feed the log pane.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Arc, Mutex};

/// Formatted log lines waiting to be moved into the state.
///
pub type LogSink = Arc<Mutex<Vec<String>>>;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {:<5} {}", timestamp, level_str, record.args())
}

/// Take every pending line out of the sink.
///
pub fn drain(sink: &LogSink) -> Vec<String> {
    match sink.lock() {
        Ok(mut pending) => std::mem::take(&mut *pending),
        Err(_) => vec![],
    }
}

/// Custom logger that captures logs to state
///
pub struct CustomLogger {
    level: LevelFilter,
    log_callback: Arc<Mutex<Option<Box<dyn Fn(String) + Send + Sync>>>>,
}

impl CustomLogger {
    pub fn new(level: LevelFilter) -> Self {
        CustomLogger {
            level,
            log_callback: Arc::new(Mutex::new(None)),
        }
    }

    /// Logger whose records are appended to `sink`.
    ///
    pub fn into_sink(level: LevelFilter, sink: LogSink) -> Self {
        let logger = CustomLogger::new(level);
        logger.set_log_callback(Box::new(move |line| {
            if let Ok(mut pending) = sink.lock() {
                pending.push(line);
            }
        }));
        logger
    }

    pub fn set_log_callback(&self, callback: Box<dyn Fn(String) + Send + Sync>) {
        if let Ok(mut guard) = self.log_callback.lock() {
            *guard = Some(callback);
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(callback) = self.log_callback.lock() {
                if let Some(ref cb) = *callback {
                    cb(format_log(record));
                }
            }
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_at(level: Level, message: &str, f: impl FnOnce(&Record)) {
        f(&Record::builder()
            .level(level)
            .args(format_args!("{}", message))
            .build());
    }

    #[test]
    fn formats_level_and_message() {
        record_at(Level::Warn, "disk low", |record| {
            let line = format_log(record);
            assert!(line.contains("WARN  disk low"));
        });
    }

    #[test]
    fn sink_collects_enabled_records() {
        let sink: LogSink = Arc::new(Mutex::new(vec![]));
        let logger = CustomLogger::into_sink(LevelFilter::Info, Arc::clone(&sink));
        record_at(Level::Info, "kept", |record| logger.log(record));
        record_at(Level::Debug, "dropped", |record| logger.log(record));
        let lines = drain(&sink);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("kept"));
        assert!(drain(&sink).is_empty());
    }

    #[test]
    fn without_callback_nothing_happens() {
        let logger = CustomLogger::new(LevelFilter::Trace);
        record_at(Level::Error, "nobody listens", |record| logger.log(record));
    }
}
