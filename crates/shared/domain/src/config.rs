use crate::props::Props;
use crate::value::ModifierValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Modifier name to its ordered list of allowed values. Declaration order is preserved.
pub type ModifierSchema = IndexMap<String, Vec<ModifierValue>>;

/// How a modifier token is spelled.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ModifierFormat {
    /// `block--value`
    #[default]
    Value,
    /// `block--name-value`
    KeyValue,
}

/// The class (or classes) a compound rule contributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompoundClass {
    One(String),
    Many(Vec<String>),
}

impl CompoundClass {
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(class) => vec![class],
            Self::Many(classes) => classes,
        }
    }
}

impl From<&str> for CompoundClass {
    fn from(class: &str) -> Self {
        Self::One(class.to_owned())
    }
}

impl From<String> for CompoundClass {
    fn from(class: String) -> Self {
        Self::One(class)
    }
}

impl From<Vec<String>> for CompoundClass {
    fn from(classes: Vec<String>) -> Self {
        Self::Many(classes)
    }
}

impl<const N: usize> From<[&str; N]> for CompoundClass {
    fn from(classes: [&str; N]) -> Self {
        Self::Many(classes.iter().map(|&c| c.to_owned()).collect())
    }
}

/// Adds `class` when every listed modifier holds its required value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundRule {
    #[serde(default)]
    pub modifiers: IndexMap<String, ModifierValue>,
    pub class: CompoundClass,
}

impl CompoundRule {
    /// Creates a rule with no conditions. Such a rule always fires.
    #[must_use]
    pub fn new(class: impl Into<CompoundClass>) -> Self {
        Self { modifiers: IndexMap::new(), class: class.into() }
    }

    /// Adds a required `name == value` condition.
    #[must_use]
    pub fn when(mut self, name: impl Into<String>, value: impl Into<ModifierValue>) -> Self {
        self.modifiers.insert(name.into(), value.into());
        self
    }
}

/// Everything a block or element declares besides its names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryOptions {
    /// Extra literal class emitted unconditionally.
    pub base: Option<String>,
    pub modifiers: ModifierSchema,
    #[serde(alias = "defaultModifiers")]
    pub default_modifiers: Props,
    #[serde(alias = "compoundModifiers")]
    pub compound_modifiers: Vec<CompoundRule>,
    #[serde(alias = "modifierFormat")]
    pub modifier_format: ModifierFormat,
}

/// Configuration of a single block or element resolver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementConfig {
    /// Required. An empty (or absent) block is rejected when the resolver is built.
    #[serde(default)]
    pub block: String,
    #[serde(default)]
    pub element: Option<String>,
    #[serde(flatten)]
    pub options: EntryOptions,
}

impl ElementConfig {
    #[must_use]
    pub fn new(block: impl Into<String>) -> Self {
        Self { block: block.into(), ..Self::default() }
    }

    #[must_use]
    pub fn element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }

    #[must_use]
    pub fn options(mut self, options: EntryOptions) -> Self {
        self.options = options;
        self
    }
}

/// A block together with its elements, the input of the bundle factory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockConfig {
    #[serde(default)]
    pub block: String,
    #[serde(flatten)]
    pub options: EntryOptions,
    #[serde(default)]
    pub elements: IndexMap<String, EntryOptions>,
}

impl BlockConfig {
    #[must_use]
    pub fn new(block: impl Into<String>) -> Self {
        Self { block: block.into(), ..Self::default() }
    }

    #[must_use]
    pub fn options(mut self, options: EntryOptions) -> Self {
        self.options = options;
        self
    }

    /// Declares an element. A repeated name replaces the earlier declaration in place.
    #[must_use]
    pub fn element(mut self, name: impl Into<String>, options: EntryOptions) -> Self {
        self.elements.insert(name.into(), options);
        self
    }
}

impl EntryOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Declares a modifier axis with its allowed values.
    #[must_use]
    pub fn modifier<V, I>(mut self, name: impl Into<String>, values: I) -> Self
    where
        V: Into<ModifierValue>,
        I: IntoIterator<Item = V>,
    {
        self.modifiers.insert(name.into(), values.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn default_modifier(
        mut self,
        name: impl Into<String>,
        value: impl Into<ModifierValue>,
    ) -> Self {
        self.default_modifiers.set(name, value);
        self
    }

    #[must_use]
    pub fn compound(mut self, rule: CompoundRule) -> Self {
        self.compound_modifiers.push(rule);
        self
    }

    #[must_use]
    pub const fn format(mut self, format: ModifierFormat) -> Self {
        self.modifier_format = format;
        self
    }
}
