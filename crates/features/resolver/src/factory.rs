use crate::element::BemElement;
use crate::error::BemError;
use bemkit_domain::{BlockConfig, ElementConfig, EntryOptions};
use indexmap::IndexMap;
use tracing::debug;

/// A block resolver together with one resolver per element.
///
/// `C` is the resolver type; binding a bundle to a style map keeps the shape and swaps `C`.
#[derive(Debug, Clone)]
pub struct BemBundle<C = BemElement> {
    pub block: C,
    pub elements: IndexMap<String, C>,
}

impl<C> BemBundle<C> {
    #[must_use]
    pub fn element(&self, name: &str) -> Option<&C> {
        self.elements.get(name)
    }

    /// Rebuilds the bundle with every resolver passed through `f`, block first, then elements
    /// in declaration order.
    pub fn map<D>(self, mut f: impl FnMut(C) -> D) -> BemBundle<D> {
        BemBundle {
            block: f(self.block),
            elements: self.elements.into_iter().map(|(name, resolver)| (name, f(resolver))).collect(),
        }
    }
}

/// Builds a block resolver and one resolver per declared element.
///
/// Element resolvers reuse the block name; their configurations are independent of each other
/// and of the block's.
///
/// # Errors
/// Returns [`BemError::MissingBlockName`] if `config.block` is empty.
///
/// # Examples
/// ```rust
/// use bemkit_classes::ClassName;
/// use bemkit_domain::{BlockConfig, EntryOptions, props};
/// use bemkit_resolver::create_bem;
///
/// # fn main() -> Result<(), bemkit_resolver::BemError> {
/// let modal = create_bem(
///     BlockConfig::new("modal")
///         .element("footer", EntryOptions::new().modifier("align", ["start", "end"])),
/// )?;
///
/// assert_eq!(modal.elements["footer"].with(&props! { "align" => "end" }), "modal__footer modal__footer--end");
/// # Ok(())
/// # }
/// ```
pub fn create_bem(config: BlockConfig) -> Result<BemBundle, BemError> {
    let BlockConfig { block: name, options, elements } = config;
    let block = BemBlock::new(name);

    let bundle = BemBundle {
        block: block.block(options)?,
        elements: elements
            .into_iter()
            .map(|(element, options)| {
                let resolver = block.element(element.as_str(), options)?;
                Ok((element, resolver))
            })
            .collect::<Result<IndexMap<_, _>, BemError>>()?,
    };

    debug!(block = %block.name(), elements = bundle.elements.len(), "Created BEM bundle");
    Ok(bundle)
}

/// Resolvers sharing one block name.
///
/// The block name is only validated when a resolver is built.
#[derive(Debug, Clone)]
pub struct BemBlock {
    name: String,
}

impl BemBlock {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolver for the block itself.
    ///
    /// # Errors
    /// Returns [`BemError::MissingBlockName`] if the block name is empty.
    pub fn block(&self, options: EntryOptions) -> Result<BemElement, BemError> {
        BemElement::new(ElementConfig::new(self.name.as_str()).options(options))
    }

    /// Resolver for `element` of this block.
    ///
    /// # Errors
    /// Returns [`BemError::MissingBlockName`] if the block name is empty.
    pub fn element(
        &self,
        element: impl Into<String>,
        options: EntryOptions,
    ) -> Result<BemElement, BemError> {
        BemElement::new(ElementConfig::new(self.name.as_str()).element(element).options(options))
    }
}
