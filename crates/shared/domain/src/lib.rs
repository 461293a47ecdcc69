//! # Domain Models
//!
//! Pure data types describing BEM blocks: modifier values, schemas, compound rules, per-call
//! props and the configuration shapes consumed by the resolver.
//! Keep it lean: no I/O and no resolution logic, just data and small helpers.

pub mod config;
pub mod props;
pub mod value;

pub use config::{
    BlockConfig, CompoundClass, CompoundRule, ElementConfig, EntryOptions, ModifierFormat,
    ModifierSchema,
};
pub use props::Props;
pub use value::ModifierValue;
