mod app_system;
mod catalog;
mod commands;
mod config;
mod domain;
mod error;
mod pricing;
mod views;


use clap::Parser;
use tokio::io::BufReader;
use tracing::{error, info};

use crate::app_system::{open_script, setup_tracing, Storefront};
use crate::catalog::Catalog;
use crate::config::{Args, Config};
use crate::error::StorefrontError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), String> {
    let config = Config::try_from(Args::parse()).map_err(|e| e.to_string())?;
    setup_tracing(&config.log_level);

    if let Err(e) = run(config).await {
        error!(error = %e, "Storefront failed");
        return Err(e.to_string());
    }
    Ok(())
}

async fn run(config: Config) -> Result<(), StorefrontError> {
    info!(start = %config.start, script = ?config.script, "Starting Paradise Nursery");

    let mut storefront = Storefront::new(Catalog::nursery(), config.start);
    let mut stdout = tokio::io::stdout();

    match &config.script {
        Some(path) => {
            let script = open_script(path).await?;
            storefront.run(script, &mut stdout).await?;
        }
        None => {
            storefront
                .run(BufReader::new(tokio::io::stdin()), &mut stdout)
                .await?;
        }
    }

    info!(
        route = %storefront.screen(),
        items = storefront.cart().item_count(),
        "Application completed successfully"
    );
    Ok(())
}
