//! Configuration management for the reconciliation daemon.
//!
//! Hierarchical loading with priority:
//! 1. Default values (hardcoded)
//! 2. `config/upsync` file, if present
//! 3. File named by the `UPSYNC_CONFIG` environment variable
//! 4. Environment variables with the `UPSYNC` prefix (highest priority)

mod directory;
mod monitoring;
mod reconciler;
mod sinks;
pub use directory::*;
pub use monitoring::*;
pub use reconciler::*;
pub use sinks::*;


//---
use std::env;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::{Error, Result};

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Coordination store connection and service selection
    pub directory: DirectoryConfig,
    /// Load-balancer endpoints to keep in sync
    #[serde(default)]
    pub load_balancer: LoadBalancerConfig,
    /// Monitoring target file settings
    #[serde(default)]
    pub monitoring: MonitoringConfig,
    /// Poll pacing and change-detection parameters
    #[serde(default)]
    pub reconciler: ReconcilerConfig,
}

impl Settings {
    /// Load configuration from all sources with proper priority ordering.
    ///
    /// # Errors
    /// Returns `Error::Config` when a required option is absent (only the
    /// coordination-store address has no default) and `Error::InvalidConfig`
    /// when a present option fails validation.
    pub fn load() -> Result<Self> {
        let mut builder =
            Config::builder().add_source(File::with_name("config/upsync").required(false));

        if let Ok(path) = env::var("UPSYNC_CONFIG") {
            builder = builder.add_source(File::with_name(&path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("UPSYNC")
                .separator("__")
                .ignore_empty(true)
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("load_balancer.endpoints"),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.directory.hosts.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "directory.hosts must name at least one coordination-store address".into(),
            ));
        }
        self.load_balancer.validate()?;
        self.monitoring.validate()?;
        self.reconciler.validate()?;
        Ok(())
    }
}
