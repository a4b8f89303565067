// src/config/models.rs
use anyhow::{bail, Result};
use serde::Deserialize;
use url::Url;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// URL of the site to check
    pub site: Url,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        match self.site.scheme() {
            "http" | "https" => Ok(()),
            other => bail!("Unsupported scheme `{}` for site {}", other, self.site),
        }
    }
}
