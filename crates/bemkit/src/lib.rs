//! Facade crate for bemkit.
//! Re-exports the class-list, resolver and binding crates under one roof.
//! Keep this crate thin: it composes other crates and holds no logic of its own.
//!
//! ## Usage
//! ```rust
//! use bemkit::prelude::*;
//!
//! # fn main() -> Result<(), BemError> {
//! let modal = bem::create(
//!     BlockConfig::new("modal")
//!         .element("footer", EntryOptions::new().modifier("align", ["start", "end"])),
//! )?;
//! assert_eq!(modal.elements["footer"].with(&props! { "align" => "end" }), "modal__footer modal__footer--end");
//!
//! let styles = StyleMap::from([("modal__footer", "_footer_q1")]);
//! let bound = bem::bind(&styles, modal);
//! assert_eq!(bound.elements["footer"].class(), "_footer_q1");
//! # Ok(())
//! # }
//! ```
//!
//! Enable the `loaders` feature to read definitions and style maps from JSON or TOML files
//! through [`kernel`].

pub use bemkit_binding as binding;
pub use bemkit_classes as classes;
pub use bemkit_domain as domain;
#[cfg(feature = "loaders")]
pub use bemkit_kernel as kernel;
pub use bemkit_resolver as resolver;

pub use bemkit_domain::props;

/// Constructors grouped the way they are usually called: `bem::create`, `bem::bind`.
pub mod bem {
    use bemkit_domain::ElementConfig;
    use bemkit_resolver::{BemBlock, BemElement, BemError};

    pub use bemkit_binding::{bind, bind_bem_class as bind_class};
    pub use bemkit_classes::cx;
    pub use bemkit_resolver::create_bem as create;

    /// Resolver for a single block or element.
    ///
    /// # Errors
    /// Returns [`BemError::MissingBlockName`] if `config.block` is empty.
    pub fn element(config: ElementConfig) -> Result<BemElement, BemError> {
        BemElement::new(config)
    }

    /// Resolvers sharing the block name `name`.
    pub fn block(name: impl Into<String>) -> BemBlock {
        BemBlock::new(name)
    }
}

pub mod prelude {
    pub use crate::bem;
    pub use bemkit_binding::{BindExt, BoundBemBundle, BoundClass, StyleMap};
    pub use bemkit_classes::{ClassName, ClassValue, cx};
    pub use bemkit_domain::{
        BlockConfig, CompoundRule, ElementConfig, EntryOptions, ModifierFormat, ModifierValue,
        Props, props,
    };
    pub use bemkit_resolver::{BemBlock, BemBundle, BemElement, BemError};
}
