use crate::compound::{Compound, append_compound_classes};
use crate::error::BemError;
use crate::merged::MergedProps;
use bemkit_classes::{ClassName, ClassValue};
use bemkit_domain::{
    CompoundRule, ElementConfig, ModifierFormat, ModifierSchema, ModifierValue, Props,
};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, trace};

#[derive(Debug)]
struct ElementInner {
    base_class: String,
    base: Option<String>,
    modifiers: ModifierSchema,
    defaults: Props,
    compounds: Vec<Compound>,
    format: ModifierFormat,
}

/// A class-name resolver for one block or element.
///
/// Built once from an [`ElementConfig`] and immutable afterwards; clones share the same
/// configuration. Resolution is a pure function of the props and extras passed in.
///
/// # Examples
/// ```rust
/// use bemkit_classes::ClassName;
/// use bemkit_domain::props;
/// use bemkit_resolver::BemElement;
///
/// # fn main() -> Result<(), bemkit_resolver::BemError> {
/// let button = BemElement::builder("button").modifier("size", ["sm", "lg"]).build()?;
///
/// assert_eq!(button.with(&props! { "size" => "sm" }), "button button--sm");
/// assert_eq!(button.class(), "button");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BemElement {
    inner: Arc<ElementInner>,
}

impl BemElement {
    /// Builds a resolver from a full configuration.
    ///
    /// # Errors
    /// Returns [`BemError::MissingBlockName`] if `config.block` is empty.
    pub fn new(config: ElementConfig) -> Result<Self, BemError> {
        let ElementConfig { block, element, options } = config;
        let element = element.filter(|e| !e.is_empty());

        if block.is_empty() {
            return Err(BemError::missing_block(element.as_deref()));
        }

        let base_class = match element {
            Some(element) => format!("{block}__{element}"),
            None => block,
        };
        let compounds: Vec<Compound> =
            options.compound_modifiers.into_iter().map(Compound::from).collect();

        debug!(
            base_class = %base_class,
            modifiers = options.modifiers.len(),
            compounds = compounds.len(),
            format = %options.modifier_format,
            "Built BEM resolver"
        );

        Ok(Self {
            inner: Arc::new(ElementInner {
                base_class,
                base: options.base.filter(|b| !b.is_empty()),
                modifiers: options.modifiers,
                defaults: options.default_modifiers,
                compounds,
                format: options.modifier_format,
            }),
        })
    }

    /// Starts a fluent configuration for `block`.
    #[must_use = "Builder must be finalized with `build()`"]
    pub fn builder(block: impl Into<String>) -> BemElementBuilder {
        BemElementBuilder { config: ElementConfig::new(block) }
    }

    /// `block` or `block__element`.
    #[must_use]
    pub fn base_class(&self) -> &str {
        &self.inner.base_class
    }

    #[must_use]
    pub fn modifiers(&self) -> &ModifierSchema {
        &self.inner.modifiers
    }

    #[must_use]
    pub fn default_modifiers(&self) -> &Props {
        &self.inner.defaults
    }

    #[must_use]
    pub fn format(&self) -> ModifierFormat {
        self.inner.format
    }

    fn modifier_class(&self, name: &str, value: &ModifierValue) -> String {
        let base = &self.inner.base_class;
        match self.inner.format {
            ModifierFormat::Value => format!("{base}--{value}"),
            ModifierFormat::KeyValue => format!("{base}--{name}-{value}"),
        }
    }
}

impl ClassName for BemElement {
    /// Base token(s), matching modifier tokens and compound classes are de-duplicated and
    /// sorted lexicographically as one list; `extras` follow unsorted.
    fn compute(&self, props: &Props, extras: &ClassValue) -> String {
        let inner = &*self.inner;
        let merged = MergedProps::new(props, &inner.defaults);

        let mut tokens: Vec<Cow<'_, str>> = Vec::with_capacity(2 + inner.modifiers.len());
        tokens.push(Cow::Borrowed(&inner.base_class));
        if let Some(base) = &inner.base {
            tokens.push(Cow::Borrowed(base));
        }

        for (name, allowed) in &inner.modifiers {
            if let Some(value) = merged.get(name).filter(|value| value.is_one_of(allowed)) {
                tokens.push(Cow::Owned(self.modifier_class(name, value)));
            }
        }

        append_compound_classes(&inner.compounds, &merged, &mut tokens);

        tokens.retain(|token| !token.is_empty());
        tokens.sort_unstable();
        tokens.dedup();

        let mut class = tokens.join(" ");
        extras.write_into(&mut class);

        trace!(base_class = %inner.base_class, class = %class, "Resolved class name");
        class
    }
}

/// Fluent construction of a [`BemElement`].
#[derive(Debug, Clone)]
pub struct BemElementBuilder {
    config: ElementConfig,
}

impl BemElementBuilder {
    #[must_use = "Builder must be finalized with `build()`"]
    pub fn element(mut self, element: impl Into<String>) -> Self {
        self.config.element = Some(element.into());
        self
    }

    /// Extra literal class emitted with every call.
    #[must_use = "Builder must be finalized with `build()`"]
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.config.options.base = Some(base.into());
        self
    }

    #[must_use = "Builder must be finalized with `build()`"]
    pub fn modifier<V, I>(mut self, name: impl Into<String>, values: I) -> Self
    where
        V: Into<ModifierValue>,
        I: IntoIterator<Item = V>,
    {
        self.config.options = self.config.options.modifier(name, values);
        self
    }

    #[must_use = "Builder must be finalized with `build()`"]
    pub fn default_modifier(
        mut self,
        name: impl Into<String>,
        value: impl Into<ModifierValue>,
    ) -> Self {
        self.config.options.default_modifiers.set(name, value);
        self
    }

    #[must_use = "Builder must be finalized with `build()`"]
    pub fn compound(mut self, rule: CompoundRule) -> Self {
        self.config.options.compound_modifiers.push(rule);
        self
    }

    #[must_use = "Builder must be finalized with `build()`"]
    pub const fn format(mut self, format: ModifierFormat) -> Self {
        self.config.options.modifier_format = format;
        self
    }

    /// Finalizes the resolver.
    ///
    /// # Errors
    /// Returns [`BemError::MissingBlockName`] if the block name is empty.
    pub fn build(self) -> Result<BemElement, BemError> {
        BemElement::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bemkit_domain::props;

    #[test]
    fn empty_element_name_is_ignored() {
        let resolver = BemElement::builder("card").element("").build().unwrap();
        assert_eq!(resolver.base_class(), "card");
    }

    #[test]
    fn empty_base_is_not_emitted() {
        let resolver = BemElement::builder("card").base("").build().unwrap();
        assert_eq!(resolver.class(), "card");
    }

    #[test]
    fn out_of_range_values_are_skipped() {
        let resolver = BemElement::builder("chip").modifier("size", ["sm"]).build().unwrap();
        assert_eq!(resolver.with(&props! { "size" => "xl" }), "chip");
    }

    #[test]
    fn non_string_values_render_into_tokens() {
        let resolver = BemElement::builder("grid")
            .modifier("cols", [2, 3])
            .modifier("dense", [true])
            .format(ModifierFormat::KeyValue)
            .build()
            .unwrap();

        assert_eq!(
            resolver.with(&props! { "cols" => 3, "dense" => true }),
            "grid grid--cols-3 grid--dense-true"
        );
    }

    #[test]
    fn error_names_the_element() {
        let err = BemElement::builder("").element("icon").build().unwrap_err();
        assert_eq!(err.to_string(), "Missing block name (element 'icon'): block name is required");
    }
}
