//! Beer Catalog - browse a craft beer catalog in the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use beer_catalog::app::{self, LaunchOptions};
use beercat_core::prelude::*;
use clap::Parser;

/// Beer Catalog - browse a craft beer catalog in the terminal
#[derive(Parser, Debug)]
#[command(name = "beercat")]
#[command(about = "Browse a craft beer catalog in the terminal", long_about = None)]
struct Args {
    /// Catalog endpoint URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Path to a config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run in headless mode (JSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Initial search text
    #[arg(long, value_name = "TEXT")]
    search: Option<String>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

impl From<Args> for LaunchOptions {
    fn from(args: Args) -> Self {
        Self {
            endpoint: args.endpoint,
            config: args.config,
            search: args.search,
            headless: args.headless,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.init_config {
        let path = app::init_config(args.config)?;
        eprintln!("Config file: {}", path.display());
        return Ok(());
    }

    app::run(args.into()).await
}
