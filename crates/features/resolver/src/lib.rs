//! # BEM resolver
//!
//! Turns a declarative block/element description into a class-name resolver.
//!
//! A resolver emits, for each call:
//!
//! 1. the base token (`block` or `block__element`) and the optional literal `base` class,
//! 2. one token per declared modifier whose merged value (call props over defaults) is in the
//!    modifier's allowed list, spelled `base--value` or `base--name-value`,
//! 3. the classes of every compound rule whose conditions all hold,
//!
//! then de-duplicates and sorts that list lexicographically and appends the caller's extras
//! unsorted. Sorting applies to the whole list, so a compound class that sorts before the block
//! name will precede the base token.
//!
//! Unknown props and values outside a modifier's allowed list are ignored. The only failure is
//! an empty block name, reported when the resolver is built.
//!
//! ## Example
//! ```rust
//! use bemkit_classes::ClassName;
//! use bemkit_domain::{CompoundRule, ModifierFormat, props};
//! use bemkit_resolver::BemElement;
//!
//! # fn main() -> Result<(), bemkit_resolver::BemError> {
//! let modal = BemElement::builder("modal")
//!     .modifier("size", ["sm", "lg"])
//!     .modifier("type", ["alert", "confirm"])
//!     .format(ModifierFormat::KeyValue)
//!     .compound(CompoundRule::new("modal--loud").when("type", "alert").when("size", "lg"))
//!     .build()?;
//!
//! assert_eq!(
//!     modal.with(&props! { "size" => "lg", "type" => "alert" }),
//!     "modal modal--loud modal--size-lg modal--type-alert"
//! );
//! # Ok(())
//! # }
//! ```

mod compound;
mod element;
mod error;
mod factory;
mod merged;

pub use element::{BemElement, BemElementBuilder};
pub use error::{BemError, BemErrorExt};
pub use factory::{BemBlock, BemBundle, create_bem};
pub use merged::MergedProps;
