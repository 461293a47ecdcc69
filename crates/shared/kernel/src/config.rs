use crate::error::{ConfigError, ConfigErrorExt};
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, info};

/// Prefix of environment overrides, e.g. `BEMKIT__LOG__LEVEL` maps to `log.level`.
pub const ENV_PREFIX: &str = "BEMKIT";

/// Loads settings from an optional file overlaid with `BEMKIT__`-prefixed environment variables.
///
/// With `None` only the environment is consulted, so `T` should tolerate missing keys
/// (`#[serde(default)]`). A given file must exist; its format follows the extension
/// (`.toml`, `.json`, `.yaml`, ...).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or malformed, or if the layered values
/// do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use bemkit_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct CliSettings {
///     log_dir: Option<String>,
/// }
///
/// let cfg: CliSettings = load_config(Some("config/bemkit")).unwrap_or_default();
/// # let _ = cfg.log_dir;
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();

    if let Some(path) = &path {
        let path: &Path = path.as_ref();
        info!(path = %path.display(), "Loading settings");
        builder = builder.add_source(File::from(path).required(true));
    } else {
        debug!("No settings file given, using environment only");
    }

    let settings = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build settings")?
        .try_deserialize::<T>()
        .context("Failed to deserialize settings")?;

    Ok(settings)
}
