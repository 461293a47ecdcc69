//! # Class lists
//!
//! Flattening of loosely shaped class inputs into one space-joined string, in the spirit of
//! `clsx`: strings, nested lists and `{ class: bool }` toggle maps are merged in argument order.
//! Empty strings, disabled toggles and [`ClassValue::None`] are omitted. Nothing is
//! de-duplicated or reordered.
//!
//! ```rust
//! use bemkit_classes::{ClassValue, cx};
//!
//! let class = cx!("btn", ["btn--primary", ""], ClassValue::toggles([("is-active", true), ("is-hidden", false)]));
//! assert_eq!(class, "btn btn--primary is-active");
//! ```
//!
//! The crate also defines [`ClassName`], the single capability every resolver offers: turn
//! per-call [`Props`] plus ad hoc extras into a class string.

mod value;

pub use bemkit_domain::Props;
pub use value::ClassValue;

/// Merges `values` into a single space-separated class string.
pub fn class_list<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassValue>,
{
    let mut out = String::new();
    for value in values {
        value.into().write_into(&mut out);
    }
    out
}

/// Variadic form of [`class_list`].
#[macro_export]
macro_rules! cx {
    () => { ::std::string::String::new() };
    ($($value:expr),+ $(,)?) => {
        $crate::class_list([$($crate::ClassValue::from($value)),+])
    };
}

/// Something that produces a class string from active props and extra classes.
///
/// Resolvers and name-bound resolvers implement it, and so does any closure of shape
/// `Fn(&Props, &ClassValue) -> String`.
pub trait ClassName {
    /// Produces the class string for `props`, followed by `extras`.
    fn compute(&self, props: &Props, extras: &ClassValue) -> String;

    /// Class string with no props and no extras.
    fn class(&self) -> String {
        self.compute(&Props::default(), &ClassValue::None)
    }

    /// Class string for `props` with no extras.
    fn with(&self, props: &Props) -> String {
        self.compute(props, &ClassValue::None)
    }
}

impl<F> ClassName for F
where
    F: Fn(&Props, &ClassValue) -> String,
{
    fn compute(&self, props: &Props, extras: &ClassValue) -> String {
        self(props, extras)
    }
}
