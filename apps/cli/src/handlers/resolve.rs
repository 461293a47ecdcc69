use anyhow::{Context, Result};
use bemkit::kernel::definition::{load_definition, load_document};
use bemkit::prelude::*;
use bemkit::domain::ModifierSchema;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Inputs of `bemkit resolve`.
#[derive(Debug)]
pub struct ResolveRequest {
    pub definition: PathBuf,
    pub element: Option<String>,
    pub set: Vec<(String, String)>,
    pub extra: Vec<String>,
    pub styles: Option<PathBuf>,
}

/// Builds the resolver named by `request` and returns its class string.
///
/// # Errors
/// Returns an error if a file cannot be loaded, the block name is empty, or the element is not
/// declared by the definition.
pub fn resolve(request: ResolveRequest) -> Result<String> {
    let config = load_definition(&request.definition)?;
    let block = config.block.clone();
    let bundle = bem::create(config)?;

    let resolver = match request.element.as_deref() {
        Some(element) => bundle
            .element(element)
            .with_context(|| format!("block '{block}' declares no element '{element}'"))?,
        None => &bundle.block,
    };

    let props: Props = request
        .set
        .iter()
        .map(|(name, raw)| (name.as_str(), coerce(resolver.modifiers(), name, raw)))
        .collect();
    let extras = ClassValue::from(request.extra);

    debug!(base_class = %resolver.base_class(), props = props.len(), "Resolving");

    let class = match request.styles.as_deref() {
        Some(path) => resolver.clone().bind_to(&load_styles(path)?).compute(&props, &extras),
        None => resolver.compute(&props, &extras),
    };

    info!(class = %class, "Resolved");
    Ok(class)
}

fn load_styles(path: &Path) -> Result<StyleMap> {
    let styles: StyleMap = load_document(path)?;
    debug!(path = %path.display(), entries = styles.len(), "Loaded style map");
    Ok(styles)
}

/// Reads a command-line value in terms of the modifier's allowed values.
///
/// An allowed value whose rendering equals `raw` wins, so `--set cols=2` matches an integer `2`
/// and `--set label=2` still matches a string `"2"`. Anything else is parsed loosely and will
/// usually be ignored by the resolver as out of range.
pub fn coerce(schema: &ModifierSchema, name: &str, raw: &str) -> ModifierValue {
    schema
        .get(name)
        .and_then(|allowed| allowed.iter().find(|value| value.to_string() == raw))
        .cloned()
        .unwrap_or_else(|| match raw.parse::<ModifierValue>() {
            Ok(value) => value,
            Err(never) => match never {},
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> ModifierSchema {
        EntryOptions::new()
            .modifier("cols", [2, 3])
            .modifier("label", ["2", "x"])
            .modifier("dense", [true])
            .modifiers
    }

    #[test]
    fn schema_values_win() {
        assert_eq!(coerce(&schema(), "cols", "2"), ModifierValue::Int(2));
        assert_eq!(coerce(&schema(), "label", "2"), ModifierValue::Str("2".to_owned()));
        assert_eq!(coerce(&schema(), "dense", "true"), ModifierValue::Bool(true));
    }

    #[test]
    fn unknown_names_parse_loosely() {
        assert_eq!(coerce(&schema(), "other", "false"), ModifierValue::Bool(false));
        assert_eq!(coerce(&schema(), "other", "lg"), ModifierValue::Str("lg".to_owned()));
    }
}
