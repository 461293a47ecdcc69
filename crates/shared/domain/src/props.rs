use crate::value::ModifierValue;
use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Active modifier values for one invocation (also used for default modifiers).
///
/// Keys are modifier names. Keys the target schema does not declare are accepted and ignored
/// at resolution time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Props(FxHashMap<String, ModifierValue>);

impl Props {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the props with `name` set to `value`, replacing any previous value.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ModifierValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ModifierValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<ModifierValue> {
        self.0.remove(name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ModifierValue> {
        self.0.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModifierValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for Props
where
    K: Into<String>,
    V: Into<ModifierValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V> Extend<(K, V)> for Props
where
    K: Into<String>,
    V: Into<ModifierValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Props
where
    K: Into<String>,
    V: Into<ModifierValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Builds [`Props`] from `name => value` pairs.
///
/// ```rust
/// use bemkit_domain::{props, ModifierValue};
///
/// let props = props! { "size" => "sm", "disabled" => true };
/// assert_eq!(props.get("disabled"), Some(&ModifierValue::Bool(true)));
/// ```
#[macro_export]
macro_rules! props {
    () => { $crate::Props::new() };
    ($($name:expr => $value:expr),+ $(,)?) => {
        $crate::Props::new()$(.with($name, $value))+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_values_replace_earlier_ones() {
        let props = Props::new().with("size", "sm").with("size", "lg");
        assert_eq!(props.len(), 1);
        assert_eq!(props.get("size"), Some(&ModifierValue::from("lg")));
    }

    #[test]
    fn collects_from_pairs() {
        let props = Props::from([("size", "sm"), ("tone", "muted")]);
        assert_eq!(props.get("tone").and_then(ModifierValue::as_str), Some("muted"));
        assert!(props.get("missing").is_none());
    }

    #[test]
    fn macro_accepts_mixed_value_kinds() {
        let props = props! { "size" => "sm", "level" => 2, "open" => false };
        assert_eq!(props.len(), 3);
        assert_eq!(props.get("level"), Some(&ModifierValue::Int(2)));
        assert!(props!().is_empty());
    }
}
