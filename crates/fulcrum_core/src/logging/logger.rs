//! Level-gated logger facade.
//!
//! # Responsibility
//! - Give every module a cheap, `static`-friendly handle onto the `log` backend.
//! - Skip message formatting entirely when the level is disabled for the target.
//!
//! # Invariants
//! - Formatting of the message arguments happens only after the enablement check.
//! - The facade never fails and never panics.

use log::Level;
use std::fmt;

/// Marker prepended to `fatal` messages, since `log` has no fatal level.
pub const FATAL_MARKER: &str = "FATAL";

/// Leveled logger bound to one target (usually `module_path!()`).
///
/// ```
/// use fulcrum_core::FulcrumLogger;
///
/// static LOGGER: FulcrumLogger = FulcrumLogger::new(module_path!());
///
/// let collection = "users";
/// LOGGER.debug(format_args!("event=example module=docs collection={collection}"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FulcrumLogger {
    target: &'static str,
}

impl FulcrumLogger {
    /// Creates a logger that writes records under `target`.
    pub const fn new(target: &'static str) -> Self {
        Self { target }
    }

    /// Returns the log target this logger writes to.
    pub fn target(&self) -> &'static str {
        self.target
    }

    /// Returns whether `level` is enabled on the backend for this target.
    pub fn is_enabled(&self, level: Level) -> bool {
        log::log_enabled!(target: self.target, level)
    }

    pub fn trace(&self, message: fmt::Arguments<'_>) {
        self.emit(Level::Trace, message);
    }

    pub fn debug(&self, message: fmt::Arguments<'_>) {
        self.emit(Level::Debug, message);
    }

    pub fn info(&self, message: fmt::Arguments<'_>) {
        self.emit(Level::Info, message);
    }

    pub fn warn(&self, message: fmt::Arguments<'_>) {
        self.emit(Level::Warn, message);
    }

    pub fn error(&self, message: fmt::Arguments<'_>) {
        self.emit(Level::Error, message);
    }

    /// Logs at error level with a [`FATAL_MARKER`] prefix.
    pub fn fatal(&self, message: fmt::Arguments<'_>) {
        if self.is_enabled(Level::Error) {
            log::log!(target: self.target, Level::Error, "{FATAL_MARKER} {message}");
        }
    }

    fn emit(&self, level: Level, message: fmt::Arguments<'_>) {
        if self.is_enabled(level) {
            log::log!(target: self.target, level, "{message}");
        }
    }
}
