mod commands;

pub use commands::*;

use crate::types::{LogLevel, OutputFormat};
use clap::Parser;

#[derive(Parser)]
#[command(name = "pantry")]
#[command(about = "Browse recipes by what is in your pantry and build a shopping list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $PANTRY_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Catalog locale, e.g. en, fr, nl
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Directory holding recipes.json and recipes/recipes-<locale>.json
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
