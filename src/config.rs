use std::path::PathBuf;

use clap::Parser;

use crate::app_system::Screen;
use crate::error::ConfigError;

#[derive(Debug, Parser)]
#[command(name = "nursery_cart")]
#[command(about = "Paradise Nursery plant shop in the terminal")]
#[command(version)]
pub struct Args {
    /// Route to open first: /, /checkout or /payment
    #[arg(short, long, default_value = "/")]
    pub start: String,

    /// Read commands from a file instead of stdin
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Tracing filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Validated runtime settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub start: Screen,
    pub script: Option<PathBuf>,
    pub log_level: String,
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let start = args
            .start
            .parse()
            .map_err(|_| ConfigError::InvalidStartRoute(args.start.clone()))?;
        Ok(Self {
            start,
            script: args.script,
            log_level: args.log_level,
        })
    }
}
