use crate::style_map::StyleMap;
use bemkit_classes::{ClassName, ClassValue, Props};
use bemkit_resolver::BemBundle;
use tracing::trace;

/// A class-name source whose output is rewritten through a [`StyleMap`].
#[derive(Debug, Clone)]
pub struct BoundClass<C> {
    styles: StyleMap,
    source: C,
}

impl<C> BoundClass<C> {
    #[must_use]
    pub const fn source(&self) -> &C {
        &self.source
    }

    #[must_use]
    pub const fn styles(&self) -> &StyleMap {
        &self.styles
    }
}

impl<C: ClassName> ClassName for BoundClass<C> {
    fn compute(&self, props: &Props, extras: &ClassValue) -> String {
        self.styles.rebind(&self.source.compute(props, extras))
    }
}

/// A bundle whose block and element resolvers are all bound to one style map.
pub type BoundBemBundle<C = bemkit_resolver::BemElement> = BemBundle<BoundClass<C>>;

/// Wraps `source` so that every class it produces is rewritten through `styles`.
///
/// Token order is kept from the wrapped output; for resolvers that is the lexicographic order
/// of the unmapped class names, not of the replacements.
pub fn bind_bem_class<C: ClassName>(styles: &StyleMap, source: C) -> BoundClass<C> {
    BoundClass { styles: styles.clone(), source }
}

/// Binds the block and every element of `bundle` to `styles`, keeping the bundle's shape.
///
/// # Examples
/// ```rust
/// use bemkit_binding::{StyleMap, bind};
/// use bemkit_classes::ClassName;
/// use bemkit_domain::{BlockConfig, EntryOptions, props};
/// use bemkit_resolver::create_bem;
///
/// # fn main() -> Result<(), bemkit_resolver::BemError> {
/// let styles = StyleMap::from([("btn", "_btn_1"), ("btn__icon", "_icon_1")]);
/// let button = create_bem(BlockConfig::new("btn").element("icon", EntryOptions::new()))?;
///
/// let bound = bind(&styles, button);
/// assert_eq!(bound.block.class(), "_btn_1");
/// assert_eq!(bound.elements["icon"].with(&props! {}), "_icon_1");
/// # Ok(())
/// # }
/// ```
pub fn bind<C: ClassName>(styles: &StyleMap, bundle: BemBundle<C>) -> BoundBemBundle<C> {
    trace!(elements = bundle.elements.len(), mapped = styles.len(), "Binding BEM bundle");
    bundle.map(|resolver| bind_bem_class(styles, resolver))
}

/// Method-style binding for any class-name source.
pub trait BindExt: ClassName + Sized {
    fn bind_to(self, styles: &StyleMap) -> BoundClass<Self> {
        bind_bem_class(styles, self)
    }
}

impl<C: ClassName> BindExt for C {}
