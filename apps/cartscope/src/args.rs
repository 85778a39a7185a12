use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

/// Game Boy cartridge header inspector
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the ROM image (.gb / .gbc)
    #[arg(required = true)]
    pub rom: PathBuf,

    /// Only print the title and the logo check
    #[arg(long)]
    pub minimal: bool,

    /// Skip drawing the boot logo
    #[arg(long)]
    pub no_logo: bool,

    /// Print the byte offsets of every header field before the report
    #[arg(long)]
    pub layout: bool,

    /// Character used for set logo pixels
    #[arg(long, default_value_t = '#')]
    pub filled: char,

    /// Character used for clear logo pixels
    #[arg(long, default_value_t = ' ')]
    pub blank: char,

    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    #[arg(short, long, default_value = "warn")]
    pub log_level: Level,
}
