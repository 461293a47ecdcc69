//! # Name binding
//!
//! CSS-module tooling renames every class of a stylesheet to a collision-resistant identifier
//! and emits the mapping. This crate rewrites resolver output through such a [`StyleMap`]:
//! each whitespace-separated token is replaced by its mapped identifier when one exists and
//! kept as-is otherwise, and the tokens are re-joined with single spaces.
//!
//! ```rust
//! use bemkit_binding::{StyleMap, bind_bem_class};
//! use bemkit_classes::{ClassName, ClassValue, Props};
//!
//! let styles = StyleMap::from([("btn", "_btn_x")]);
//! let bound = bind_bem_class(&styles, |_: &Props, _: &ClassValue| "btn  extra".to_owned());
//!
//! assert_eq!(bound.class(), "_btn_x extra");
//! ```

mod bound;
mod style_map;

pub use bound::{BindExt, BoundBemBundle, BoundClass, bind, bind_bem_class};
pub use style_map::StyleMap;
