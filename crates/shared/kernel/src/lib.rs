//! Kernel utilities shared by the bemkit front-ends.
//! Keep this crate lightweight: it layers settings and reads definition documents, nothing more.
//!
//! ## Settings
//! ```rust
//! use bemkit_kernel::config::load_config;
//!
//! #[derive(Default, serde::Deserialize)]
//! #[serde(default)]
//! struct Settings {
//!     verbose: bool,
//! }
//!
//! let settings: Settings = load_config(None::<&str>).unwrap_or_default();
//! # let _ = settings.verbose;
//! ```
//!
//! ## Definitions
//! ```rust,no_run
//! use bemkit_kernel::definition::load_definition;
//!
//! let config = load_definition("button.toml").unwrap();
//! assert_eq!(config.block, "button");
//! ```
pub mod config;
pub mod definition;
mod error;

pub use crate::definition::DocumentFormat;
pub use crate::error::{ConfigError, ConfigErrorExt};
pub use bemkit_domain as domain;
