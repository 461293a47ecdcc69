//! # Logger
//!
//! Installs the global `tracing` subscriber for bemkit binaries.
//!
//! Console output goes to **stderr**, so whatever a command prints on stdout stays machine
//! readable. An optional directory adds rolling, non-blocking file output, plain or JSON.
//! `RUST_LOG` is honoured unless an explicit filter is configured.
//!
//! ## Example
//!
//! ```rust
//! # use bemkit_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("bemkit")
//!     .verbosity(2)
//!     .init()
//!     .unwrap();
//!
//! tracing::debug!("visible at -vv");
//! ```

mod error;
mod settings;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use crate::settings::{LogSettings, RotationPolicy};
pub use tracing::level_filters::LevelFilter;

use crate::settings::DEFAULT_MAX_FILES;
use private::Sealed;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_FILE_SUFFIX: &str = "log";

/// Maps a repeated `-v` count to a level: none is `WARN`, then `INFO`, `DEBUG` and `TRACE`.
#[must_use]
pub const fn level_for_verbosity(occurrences: u8) -> LevelFilter {
    match occurrences {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

#[derive(Debug)]
struct LoggerConfig {
    level: LevelFilter,
    filter: Option<String>,
    console: bool,
    ansi: bool,
    dir: Option<PathBuf>,
    json: bool,
    rotation: RotationPolicy,
    max_files: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::WARN,
            filter: None,
            console: true,
            ansi: true,
            dir: None,
            json: false,
            rotation: RotationPolicy::Daily,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

#[derive(Debug)]
pub struct Unnamed;
#[derive(Debug)]
pub struct Named(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for Unnamed {}
impl Sealed for Named {}

/// Configures the global subscriber. A name is required before [`LoggerBuilder::init`].
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = Unnamed> {
    config: LoggerConfig,
    name: N,
}

impl LoggerBuilder<Unnamed> {
    /// Names the logger; the name prefixes rolling log files.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named> {
        LoggerBuilder { config: self.config, name: Named(name.into()) }
    }
}

impl LoggerBuilder<Named> {
    #[must_use = "The builder must be finalized with `init()`"]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Sets the level from a repeated `-v` count, see [`level_for_verbosity`].
    #[must_use = "The builder must be finalized with `init()`"]
    pub const fn verbosity(self, occurrences: u8) -> Self {
        self.level(level_for_verbosity(occurrences))
    }

    /// Filter directives such as `bemkit_resolver=trace`. Replaces `RUST_LOG`.
    ///
    /// Invalid directives make [`LoggerBuilder::init`] fail.
    #[must_use = "The builder must be finalized with `init()`"]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.filter = Some(filter.into());
        self
    }

    #[must_use = "The builder must be finalized with `init()`"]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Colour codes on the console layer.
    #[must_use = "The builder must be finalized with `init()`"]
    pub const fn ansi(mut self, enabled: bool) -> Self {
        self.config.ansi = enabled;
        self
    }

    /// Adds rolling file output under `dir`, created on init if needed.
    #[must_use = "The builder must be finalized with `init()`"]
    pub fn directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.dir = Some(dir.into());
        self
    }

    /// Writes file output as JSON lines. Has no effect without a directory.
    #[must_use = "The builder must be finalized with `init()`"]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.config.json = enabled;
        self
    }

    #[must_use = "The builder must be finalized with `init()`"]
    pub const fn rotation(mut self, rotation: RotationPolicy) -> Self {
        self.config.rotation = rotation;
        self
    }

    #[must_use = "The builder must be finalized with `init()`"]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    /// Applies a settings-file section. Unset optional values keep what the builder has.
    #[must_use = "The builder must be finalized with `init()`"]
    pub fn settings(mut self, settings: &LogSettings) -> Self {
        if let Some(filter) = &settings.filter {
            self.config.filter = Some(filter.clone());
        }
        if let Some(dir) = &settings.dir {
            self.config.dir = Some(dir.clone());
        }
        self.config.json = settings.json;
        self.config.rotation = settings.rotation;
        self.config.max_files = settings.max_files;
        self
    }

    /// Installs the subscriber.
    ///
    /// The returned [`Logger`] owns the file writer's worker guard; keep it alive until shutdown
    /// so buffered lines are flushed.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`, a bad
    /// filter or no enabled output, [`LoggerError::Io`]/[`LoggerError::Appender`] if the log
    /// directory is unusable, and [`LoggerError::Subscriber`] if a global subscriber exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { config, name: Named(name) } = self;
        validate(&config, &name)?;

        let env_filter = build_env_filter(&config)?;
        let mut layers = Vec::new();

        if config.console {
            layers.push(layer().compact().with_writer(std::io::stderr).with_ansi(config.ansi).boxed());
        }

        let guard = match &config.dir {
            Some(dir) => {
                fs::create_dir_all(dir).context(format!("Failed to create {}", dir.display()))?;

                let appender = RollingFileAppender::builder()
                    .rotation(config.rotation.into())
                    .filename_prefix(&name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(config.max_files)
                    .build(dir)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                let file_layer = layer().with_writer(writer).with_ansi(false);
                layers.push(if config.json { file_layer.json().boxed() } else { file_layer.boxed() });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::invalid("no output enabled, enable the console or a log directory"));
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;
        tracing::debug!(logger = %name, level = %config.level, dir = ?config.dir, "Logger initialized");

        Ok(Logger { guard, dir: config.dir })
    }
}

/// Handle to the installed subscriber. Dropping it flushes and stops file output.
#[must_use = "Dropping this handle stops background file logging"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
    dir: Option<PathBuf>,
}

impl Logger {
    #[must_use = "The builder must be finalized with `init()`"]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: Unnamed }
    }

    /// The file writer's worker guard, present when a directory was configured.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }

    #[must_use]
    pub fn directory(&self) -> Option<&Path> {
        self.dir.as_deref()
    }
}

fn validate(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::invalid("logger name cannot be empty"));
    }
    if config.dir.is_some() && config.max_files == 0 {
        return Err(LoggerError::invalid("max_files must be greater than zero"));
    }
    Ok(())
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: e.to_string().into(),
                context: Some(format!("filter '{filter}'").into()),
            })
        },
    )
}
