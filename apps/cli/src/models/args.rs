//! # CLI Argument Definitions
//!
//! Command-line structure of the `bemkit` binary, declared with `clap` derive.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "bemkit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Resolve BEM class names from block definition files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: AppCommands,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace); logs go to stderr
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Settings file (TOML/JSON/YAML), overridable with BEMKIT__* environment variables
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also write rolling log files into this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Print the class string of a block or one of its elements
    Resolve {
        /// Block definition (.json or .toml)
        #[arg(short, long, value_name = "FILE")]
        definition: PathBuf,

        /// Resolve this element instead of the block
        #[arg(short, long)]
        element: Option<String>,

        /// Active modifier, repeatable (e.g. --set size=lg)
        #[arg(short, long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
        set: Vec<(String, String)>,

        /// Extra class appended after the generated ones, repeatable
        #[arg(short = 'x', long = "extra", value_name = "CLASS")]
        extra: Vec<String>,

        /// CSS-module style map (JSON object of class name to generated name)
        #[arg(long, value_name = "FILE")]
        styles: Option<PathBuf>,
    },
    /// List the block and its elements with their modifier axes
    Inspect {
        /// Block definition (.json or .toml)
        #[arg(short, long, value_name = "FILE")]
        definition: PathBuf,
    },
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_owned(), value.to_owned()))
        },
        _ => Err(format!("expected NAME=VALUE, got '{raw}'")),
    }
}
