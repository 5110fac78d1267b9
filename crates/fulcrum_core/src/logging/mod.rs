//! Logging bootstrap and leveled facade.
//!
//! # Responsibility
//! - Route `log` records to rolling files under one directory per process.
//! - Expose [`FulcrumLogger`] so core modules log through one gated facade.
//!
//! # Invariants
//! - The backend starts at most once; repeating the same [`LogSettings`] is a no-op.
//! - Asking for different settings after start is an error, never a silent switch.

mod logger;

pub use logger::{FulcrumLogger, FATAL_MARKER};

use crate::config::Configuration;
use flexi_logger::{
    Cleanup, Criterion, FileSpec, LogSpecification, Logger, LoggerHandle, Naming, WriteMode,
};
use log::Level;
use once_cell::sync::OnceCell;
use std::fmt;
use std::path::{Path, PathBuf};

/// Configuration key holding the log level.
pub const LOG_LEVEL_KEY: &str = "log.level";
/// Configuration key holding the absolute log directory.
pub const LOG_DIR_KEY: &str = "log.dir";

const FILE_BASENAME: &str = "fulcrum";
const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;
const KEEP_FILES: usize = 5;

static ACTIVE: OnceCell<ActiveBackend> = OnceCell::new();
static LOGGER: FulcrumLogger = FulcrumLogger::new(module_path!());

struct ActiveBackend {
    settings: LogSettings,
    _handle: LoggerHandle,
}

/// Validated level and directory for the file backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: Level,
    pub dir: PathBuf,
}

impl LogSettings {
    /// Validates a level name and an absolute directory.
    ///
    /// Level names are case-insensitive; `warning` means `warn` and `fatal`
    /// means `error`.
    pub fn new(level: &str, dir: impl AsRef<Path>) -> Result<Self, String> {
        let dir = dir.as_ref();
        if !dir.is_absolute() {
            return Err(format!(
                "log directory must be an absolute path, got `{}`",
                dir.display()
            ));
        }
        Ok(Self {
            level: parse_level(level)?,
            dir: dir.to_path_buf(),
        })
    }

    /// Reads `log.level` (optional) and `log.dir` (required).
    pub fn from_config(config: &Configuration) -> Result<Self, String> {
        let dir = config.require(LOG_DIR_KEY).map_err(|err| err.to_string())?;
        let level = config
            .get(LOG_LEVEL_KEY)
            .unwrap_or(default_log_level().as_str());
        Self::new(level, dir.trim())
    }

    fn start_backend(&self) -> Result<LoggerHandle, String> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|err| format!("cannot create `{}`: {err}", self.dir.display()))?;

        let spec = LogSpecification::builder()
            .default(self.level.to_level_filter())
            .build();
        Logger::with(spec)
            .log_to_file(FileSpec::default().directory(&self.dir).basename(FILE_BASENAME))
            .rotate(
                Criterion::Size(ROTATE_AT_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(KEEP_FILES),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .format_for_files(flexi_logger::detailed_format)
            .start()
            .map_err(|err| format!("cannot start file logger: {err}"))
    }
}

impl fmt::Display for LogSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "level={} dir={}",
            self.level.as_str().to_ascii_lowercase(),
            self.dir.display()
        )
    }
}

/// Starts the file backend, or confirms it already runs with `settings`.
///
/// # Errors
/// - The directory cannot be created or the backend fails to start.
/// - Logging already runs with different settings.
pub fn install(settings: LogSettings) -> Result<(), String> {
    let active = ACTIVE.get_or_try_init(|| {
        let handle = settings.start_backend()?;
        LOGGER.info(format_args!(
            "event=logging_init module=logging status=ok {settings} version={}",
            env!("CARGO_PKG_VERSION")
        ));
        Ok::<_, String>(ActiveBackend {
            settings: settings.clone(),
            _handle: handle,
        })
    })?;

    if active.settings != settings {
        return Err(format!(
            "logging already active with {}; cannot reconfigure to {settings}",
            active.settings
        ));
    }
    Ok(())
}

/// Shorthand for [`LogSettings::new`] followed by [`install`].
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    install(LogSettings::new(level, log_dir.trim())?)
}

/// Shorthand for [`LogSettings::from_config`] followed by [`install`].
pub fn init_logging_from_config(config: &Configuration) -> Result<(), String> {
    install(LogSettings::from_config(config)?)
}

/// Settings the backend was started with, if it has been started.
pub fn logging_status() -> Option<&'static LogSettings> {
    ACTIVE.get().map(|active| &active.settings)
}

/// `Debug` in debug builds, `Info` in release builds.
pub fn default_log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}

fn parse_level(raw: &str) -> Result<Level, String> {
    let name = raw.trim().to_ascii_lowercase();
    match name.as_str() {
        "warning" => Ok(Level::Warn),
        "fatal" => Ok(Level::Error),
        other => other
            .parse()
            .map_err(|_| format!("unknown log level `{raw}`")),
    }
}
