use thiserror::Error;

use crate::domain::ProductId;

/// Problems with a single line of user input. The session reports these and
/// keeps running.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CommandError {
    #[error("Input is not valid UTF-8")]
    InvalidEncoding,
    #[error("Unknown command: {0} (type 'help' for a list)")]
    UnknownCommand(String),
    #[error("Missing argument for '{0}'")]
    MissingArgument(&'static str),
    #[error("Unexpected argument for '{command}': {argument}")]
    UnexpectedArgument { command: &'static str, argument: String },
    #[error("Invalid product id: {0}")]
    InvalidProductId(String),
    #[error("Product not found: {0}")]
    UnknownProduct(ProductId),
    #[error("Unknown route: {0}")]
    UnknownRoute(String),
    #[error("'{action}' is not available on {route}")]
    NotAvailable { action: String, route: &'static str },
}

/// Failures that end the session.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("Failed to read input: {0}")]
    Input(#[source] std::io::Error),
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
    #[error("Failed to open script {path}: {source}")]
    Script {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid start route: {0}")]
    InvalidStartRoute(String),
}
