use std::path::PathBuf;

use serde::Deserialize;

use crate::{Error, Result};

#[derive(Debug, Deserialize, Clone)]
pub struct MonitoringConfig {
    /// File picked up by a file-based monitoring discovery mechanism.
    /// Overwritten wholesale (write-then-rename) on every delivery.
    #[serde(default = "default_target_file")]
    pub target_file: PathBuf,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            target_file: default_target_file(),
        }
    }
}

impl MonitoringConfig {
    pub fn validate(&self) -> Result<()> {
        if self.target_file.as_os_str().is_empty() {
            return Err(Error::InvalidConfig(
                "monitoring.target_file must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_target_file() -> PathBuf {
    PathBuf::from("targets.json")
}
