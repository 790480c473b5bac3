//! `log` facade backend.
//!
//! [`init`] installs a [`LogBridge`] so that `log::info!` and friends come out
//! through a [`PrefixLogger`]: `Error` → `ERRR:`, `Warn` → `WARN:`,
//! `Info` → `INFO:`, `Debug` and `Trace` → `DEBUG:`.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::logger::{PrefixLogger, Severity};
use crate::value::Value;

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => Severity::Error,
            Level::Warn => Severity::Warning,
            Level::Info => Severity::Info,
            Level::Debug | Level::Trace => Severity::Debug,
        }
    }
}

pub struct LogBridge {
    logger: PrefixLogger<'static>,
    level: LevelFilter,
}

impl LogBridge {
    pub fn new(level: LevelFilter) -> Self {
        Self::with_logger(PrefixLogger::new(), level)
    }

    pub fn with_logger(logger: PrefixLogger<'static>, level: LevelFilter) -> Self {
        Self { logger, level }
    }

    /// The line a record would print, or `None` when filtered out.
    pub fn render(&self, record: &Record<'_>) -> Option<String> {
        if !self.enabled(record.metadata()) {
            return None;
        }
        Some(self.logger.line(
            Severity::from(record.level()),
            &[Value::Str(record.args().to_string())],
        ))
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let _ = self.logger.log(
                Severity::from(record.level()),
                &[Value::Str(record.args().to_string())],
            );
        }
    }

    fn flush(&self) {}
}

/// Installs a default [`LogBridge`] as the global logger.
///
/// Fails if a global logger is already set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    init_with(LogBridge::new(level))
}

/// Installs a configured [`LogBridge`] as the global logger.
pub fn init_with(bridge: LogBridge) -> Result<(), SetLoggerError> {
    let level = bridge.level;
    log::set_boxed_logger(Box::new(bridge))?;
    log::set_max_level(level);
    Ok(())
}
