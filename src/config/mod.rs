// src/config/mod.rs
mod models;

pub use models::*;

use anyhow::{Context, Result};
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment};

impl Config {
    /// Load configuration from the process environment
    pub fn load() -> Result<Config> {
        Self::from_builder(config::Config::builder().add_source(Environment::default()))
    }

    /// Resolve a configuration from any layered source (env, overrides, ...)
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Config> {
        let settings = builder
            .build()
            .context("Failed to read configuration sources")?;

        let config: Config = settings
            .try_deserialize()
            .context("The `site` environment variable must hold the URL to check")?;

        config.validate()?;
        Ok(config)
    }
}
