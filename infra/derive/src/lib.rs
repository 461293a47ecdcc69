#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the bemkit workspace.
//!
//! Every crate that reports failures declares its error enum with [`macro@bem_error`], so errors
//! look and behave the same across the resolver, the loaders and the logger.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! bemkit-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for declaring a crate's error enum.
///
/// # Injected Behaviors
///
/// * **Derives**: adds `Debug` and `thiserror::Error` unless already derived.
/// * **Context**: generates a companion `<Name>Ext` trait with `.context(...)` for
///   `Result<T, Name>` and for `Result<T, Source>` of every variant wrapping a source error.
/// * **Conversions**: `From<Source>` for every variant with a `source` field (or a field marked
///   `#[source]`/`#[from]`), so upstream errors work with `?`.
/// * **Internal fallback**: `From<&'static str>` and `From<String>` when an `Internal` variant
///   exists.
/// * **Formatting**: a private `format_context` helper rendering `Some(ctx)` as `" (ctx)"`.
///
/// # Requirements
///
/// 1. Applied to an **enum** whose variants all have named fields.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants wrapping a source error must carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use bemkit_derive::bem_error;
/// use std::borrow::Cow;
///
/// #[bem_error]
/// pub enum LoadError {
///     #[error("I/O failure{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, LoadError> {
///     std::fs::read_to_string(path).context(format!("Reading {path}"))
/// }
/// ```
#[proc_macro_attribute]
pub fn bem_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
