#![allow(clippy::print_stdout)]

pub mod handlers;
pub mod models;

use crate::handlers::inspect::inspect;
use crate::handlers::resolve::{ResolveRequest, resolve};
use crate::models::args::{AppCommands, Cli};
use crate::models::settings::CliSettings;

use anyhow::Result;
use bemkit::kernel::config::load_config;
use bemkit_logger::Logger;
use clap::Parser;
use std::io::IsTerminal;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings: CliSettings = load_config(cli.config.as_deref())?;

    let mut logger = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .verbosity(cli.verbose)
        .ansi(std::io::stderr().is_terminal())
        .settings(&settings.log);
    if let Some(dir) = &cli.log_dir {
        logger = logger.directory(dir);
    }
    let _logger = logger.init()?;

    let output = match cli.command {
        AppCommands::Resolve { definition, element, set, extra, styles } => {
            resolve(ResolveRequest { definition, element, set, extra, styles })?
        },
        AppCommands::Inspect { definition } => inspect(&definition)?,
    };

    println!("{}", output.trim_end());
    Ok(())
}
