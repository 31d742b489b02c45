pub(crate) mod config;
pub(crate) mod content;
pub(crate) mod offers;
pub(crate) mod parse;

use std::path::Path;

use serde::Serialize;

use comparo_feed::{Catalog, FeedConfig};

use crate::error::CliError;

/// Load the config from `--config` or the default location.
pub(crate) fn load_config(path: Option<&Path>) -> Result<FeedConfig, CliError> {
    let config = match path {
        Some(p) => FeedConfig::load(p)?,
        None => FeedConfig::load_default()?,
    };
    Ok(config)
}

pub(crate) fn build_catalog(path: Option<&Path>) -> Result<Catalog, CliError> {
    Ok(Catalog::from_config(load_config(path)?)?)
}

pub(crate) fn runtime() -> Result<tokio::runtime::Runtime, CliError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {e}")))
}

/// Pretty-print a value as JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
