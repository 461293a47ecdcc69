use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing_appender::rolling::Rotation;

pub(crate) const DEFAULT_MAX_FILES: usize = 10;

/// Logging section of a settings file.
///
/// ```toml
/// [log]
/// filter = "bemkit_resolver=trace"
/// dir = "logs"
/// json = true
/// rotation = "hourly"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Directives in `RUST_LOG` syntax, applied on top of the level.
    pub filter: Option<String>,
    /// Directory for rolling log files; no file output when absent.
    pub dir: Option<PathBuf>,
    /// Write file output as JSON lines.
    pub json: bool,
    pub rotation: RotationPolicy,
    pub max_files: usize,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: None,
            dir: None,
            json: false,
            rotation: RotationPolicy::default(),
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

/// How often file output rolls over to a new file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationPolicy {
    Minutely,
    Hourly,
    #[default]
    Daily,
    Never,
}

impl From<RotationPolicy> for Rotation {
    fn from(policy: RotationPolicy) -> Self {
        match policy {
            RotationPolicy::Minutely => Self::MINUTELY,
            RotationPolicy::Hourly => Self::HOURLY,
            RotationPolicy::Daily => Self::DAILY,
            RotationPolicy::Never => Self::NEVER,
        }
    }
}
