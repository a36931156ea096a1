//! Application messages for inter-thread communication.

use benchmap_core::Bench;

use super::DataSource;

/// Messages sent from background load threads to the main UI loop.
pub enum AppMessage {
    /// A bench collection finished loading (from file or fallback).
    BenchesLoaded {
        source: DataSource,
        benches: Vec<Bench>,
    },
    /// A load failed and the current collection should be kept.
    Error { context: String, message: String },
    /// A log message for the console.
    Log(LogEntry),
}

/// Log level for console messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    Success,
}

/// A log entry for the console panel.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: std::time::SystemTime,
}

impl LogEntry {
    fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: std::time::SystemTime::now(),
        }
    }

    pub fn info(msg: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, msg)
    }

    pub fn warning(msg: impl Into<String>) -> Self {
        Self::new(LogLevel::Warning, msg)
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self::new(LogLevel::Error, msg)
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self::new(LogLevel::Success, msg)
    }
}
