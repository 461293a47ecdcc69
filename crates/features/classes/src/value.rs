use indexmap::IndexMap;
use std::fmt;

/// One argument of a class list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClassValue {
    /// Contributes nothing.
    #[default]
    None,
    /// A literal class string, emitted verbatim unless empty.
    Text(String),
    /// Nested values, flattened in order.
    List(Vec<Self>),
    /// Candidate classes, each emitted only when its flag is `true`.
    Toggles(IndexMap<String, bool>),
}

impl ClassValue {
    /// Builds a toggle map from `(class, enabled)` pairs.
    pub fn toggles<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, bool)>,
    {
        Self::Toggles(pairs.into_iter().map(|(k, on)| (k.into(), on)).collect())
    }

    /// Returns `true` if the value would contribute no class at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Text(text) => text.is_empty(),
            Self::List(items) => items.iter().all(Self::is_empty),
            Self::Toggles(map) => !map.iter().any(|(class, on)| *on && !class.is_empty()),
        }
    }

    /// Appends this value's classes to `out`, separated from existing content by one space.
    pub fn write_into(&self, out: &mut String) {
        match self {
            Self::None => {},
            Self::Text(text) => push_class(out, text),
            Self::List(items) => items.iter().for_each(|item| item.write_into(out)),
            Self::Toggles(map) => {
                map.iter().filter(|(_, on)| **on).for_each(|(class, _)| push_class(out, class));
            },
        }
    }
}

fn push_class(out: &mut String, class: &str) {
    if class.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(class);
}

impl fmt::Display for ClassValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_into(&mut out);
        f.write_str(&out)
    }
}

impl From<&str> for ClassValue {
    fn from(class: &str) -> Self {
        Self::Text(class.to_owned())
    }
}

impl From<String> for ClassValue {
    fn from(class: String) -> Self {
        Self::Text(class)
    }
}

impl From<&String> for ClassValue {
    fn from(class: &String) -> Self {
        Self::Text(class.clone())
    }
}

impl From<&Self> for ClassValue {
    fn from(value: &Self) -> Self {
        value.clone()
    }
}

impl<T: Into<Self>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for ClassValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>, const N: usize> From<[T; N]> for ClassValue {
    fn from(items: [T; N]) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// A single conditional class.
impl From<(&str, bool)> for ClassValue {
    fn from((class, on): (&str, bool)) -> Self {
        Self::toggles([(class, on)])
    }
}

impl From<IndexMap<String, bool>> for ClassValue {
    fn from(map: IndexMap<String, bool>) -> Self {
        Self::Toggles(map)
    }
}
