use std::{env::VarError, net::SocketAddr};

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_SITE_ROOT: &str = "target/site";

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub app_addr: SocketAddr,
    pub site_root: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_vars(
            optional_var("APP_ADDR", dotenvy::var("APP_ADDR"))?,
            optional_var("SITE_ROOT", dotenvy::var("SITE_ROOT"))?,
        )
    }

    /// Builds a config from raw variable values, falling back to defaults for unset ones.
    pub fn from_vars(app_addr: Option<String>, site_root: Option<String>) -> Result<Self> {
        let app_addr = app_addr.unwrap_or_else(|| DEFAULT_ADDR.to_string());

        Ok(Self {
            app_addr: app_addr
                .parse()
                .with_context(|| format!("APP_ADDR must be a socket address, got {app_addr:?}"))?,
            site_root: site_root.unwrap_or_else(|| DEFAULT_SITE_ROOT.to_string()),
        })
    }
}

/// Only an absent variable counts as unset; anything else unreadable is an error.
fn optional_var(key: &str, value: Result<String, dotenvy::Error>) -> Result<Option<String>> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("{key} could not be read")),
    }
}
