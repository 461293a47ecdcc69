//! # Resolver Errors
//!
//! Resolution itself never fails: unknown props, out-of-range values and the like are ignored.
//! The only failure is a misconfigured resolver, reported when it is built.

use std::borrow::Cow;

/// A specialized [`BemError`] enum of this crate.
#[bemkit_derive::bem_error]
pub enum BemError {
    /// The configuration has an empty or absent block name.
    #[error("Missing block name{}: {message}", format_context(.context))]
    MissingBlockName { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl BemError {
    pub(crate) fn missing_block(element: Option<&str>) -> Self {
        Self::MissingBlockName {
            message: "block name is required".into(),
            context: element.map(|e| format!("element '{e}'").into()),
        }
    }
}
