#![deny(missing_docs)]
//! Shared logging utilities for the TextExplorer workspace.
//!
//! This crate provides the `explorer_*` logging macros used across the
//! codebase, the [`AuditSink`] handle the app shell injects into the effect
//! runner, and a minimal test initializer for the global logger.

use std::sync::Mutex;

#[doc(hidden)]
pub use log;
pub use log::Level;

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! explorer_info {
    ($($arg:tt)*) => {{
        $crate::log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! explorer_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! explorer_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! explorer_error {
    ($($arg:tt)*) => {{
        $crate::log::error!($($arg)*);
    }};
}

/// Log target used for audit records, so they can be filtered separately.
pub const AUDIT_TARGET: &str = "audit";

/// Destination for audit records: what the user did and what came out of it.
///
/// One sink is constructed at process start and handed to whoever needs it.
/// Recording never fails from the caller's point of view.
pub trait AuditSink: Send + Sync {
    /// Records a single audit message at the given level.
    fn record(&self, level: Level, message: &str);
}

/// Audit sink that forwards every record to the global `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAuditSink;

impl AuditSink for LogAuditSink {
    fn record(&self, level: Level, message: &str) {
        log::log!(target: AUDIT_TARGET, level, "{message}");
    }
}

/// A single record captured by [`MemoryAuditSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    /// Severity the record was logged with.
    pub level: Level,
    /// Rendered message text.
    pub message: String,
}

/// Audit sink that keeps records in memory. Used by tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    records: Mutex<Vec<AuditRecord>>,
}

impl MemoryAuditSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything recorded so far, oldest first.
    pub fn records(&self) -> Vec<AuditRecord> {
        match self.records.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Returns only the message texts, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.records().into_iter().map(|r| r.message).collect()
    }
}

impl AuditSink for MemoryAuditSink {
    fn record(&self, level: Level, message: &str) {
        let record = AuditRecord {
            level,
            message: message.to_string(),
        };
        match self.records.lock() {
            Ok(mut guard) => guard.push(record),
            Err(poisoned) => poisoned.into_inner().push(record),
        }
    }
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
