use bemkit_domain::{ModifierValue, Props};

/// Call-time props layered over the configured defaults.
///
/// Lookups consult the explicit props first and fall back to the defaults, which is the shallow
/// `{ ...defaults, ...props }` merge without building a new map per call.
#[derive(Debug, Clone, Copy)]
pub struct MergedProps<'a> {
    props: &'a Props,
    defaults: &'a Props,
}

impl<'a> MergedProps<'a> {
    #[must_use]
    pub const fn new(props: &'a Props, defaults: &'a Props) -> Self {
        Self { props, defaults }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a ModifierValue> {
        self.props.get(name).or_else(|| self.defaults.get(name))
    }
}
