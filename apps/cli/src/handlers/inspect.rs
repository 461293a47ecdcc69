use anyhow::Result;
use bemkit::kernel::definition::load_definition;
use bemkit::prelude::*;
use std::fmt::Write as _;
use std::path::Path;

/// Renders the block and each element with its base class, format and modifier axes.
///
/// # Errors
/// Returns an error if the definition cannot be loaded or the block name is empty.
pub fn inspect(definition: &Path) -> Result<String> {
    let config = load_definition(definition)?;
    let block = config.block.clone();
    let bundle = bem::create(config)?;

    let mut out = String::new();
    writeln!(out, "Block '{block}' ({} elements)\n", bundle.elements.len())?;
    writeln!(out, "{:<15} {:<30} {:<10} {}", "Target", "Base class", "Format", "Modifiers")?;
    writeln!(out, "{:-<80}", "")?;

    render_row(&mut out, "(block)", &bundle.block)?;
    for (name, resolver) in &bundle.elements {
        render_row(&mut out, name, resolver)?;
    }

    Ok(out)
}

fn render_row(out: &mut String, target: &str, resolver: &BemElement) -> std::fmt::Result {
    let modifiers = resolver
        .modifiers()
        .iter()
        .map(|(name, allowed)| {
            let values = allowed.iter().map(ToString::to_string).collect::<Vec<_>>().join("|");
            match resolver.default_modifiers().get(name) {
                Some(default) => format!("{name}=[{values}] ({default})"),
                None => format!("{name}=[{values}]"),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    writeln!(
        out,
        "{:<15} {:<30} {:<10} {}",
        target,
        resolver.base_class(),
        resolver.format().as_ref(),
        if modifiers.is_empty() { "-" } else { modifiers.as_str() }
    )
}
