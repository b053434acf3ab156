//! numkit command line
//!
//! ```text
//! numkit gcd 12 4 8
//! numkit luhn 4485275742308327
//! numkit ease easeInOutQuart 0.3
//! numkit animate 50 100 3000 --interval 500 --easing easeOutBounce
//! ```

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::commands::Command;
use crate::config::NumkitConfig;

#[derive(Parser, Debug)]
#[command(name = "numkit", version, about = "Numeric utilities, easing curves and value animation")]
struct Cli {
    /// Config file or directory containing numkit.toml
    #[arg(long, global = true, default_value = ".")]
    config: PathBuf,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = NumkitConfig::load(&cli.config)?;
    commands::run(cli.command, &config)
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
