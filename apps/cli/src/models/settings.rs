use bemkit_logger::LogSettings;
use serde::Deserialize;

/// Contents of the `--config` file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CliSettings {
    pub log: LogSettings,
}
