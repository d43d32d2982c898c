use serde::Deserialize;

use crate::backend::Comparison;
use crate::{Error, Result};

/// Poll pacing and delivery-retry parameters.
///
/// Backoff is expressed in ticks rather than wall time: the loop only wakes
/// once per poll interval, so a holdoff of N means N polls are observed (and
/// logged) before the next delivery attempt of an unchanged, undelivered set.
/// `base_delay_ticks = 0` disables backoff and retries every tick, which
/// matches the historical behavior.
#[derive(Debug, Deserialize, Clone)]
pub struct ReconcilerConfig {
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    #[serde(default)]
    pub comparison: Comparison,

    #[serde(default = "default_base_delay_ticks")]
    pub base_delay_ticks: u32,

    #[serde(default = "default_max_delay_ticks")]
    pub max_delay_ticks: u32,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
            comparison: Comparison::default(),
            base_delay_ticks: default_base_delay_ticks(),
            max_delay_ticks: default_max_delay_ticks(),
        }
    }
}

impl ReconcilerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_secs == 0 {
            return Err(Error::InvalidConfig(
                "reconciler.poll_interval_secs must be at least 1".into(),
            ));
        }
        if self.base_delay_ticks > 0 && self.max_delay_ticks < self.base_delay_ticks {
            return Err(Error::InvalidConfig(format!(
                "reconciler.max_delay_ticks ({}) must not be below base_delay_ticks ({})",
                self.max_delay_ticks, self.base_delay_ticks
            )));
        }
        Ok(())
    }
}

fn default_poll_interval_secs() -> u64 {
    1
}

fn default_base_delay_ticks() -> u32 {
    0
}

fn default_max_delay_ticks() -> u32 {
    60
}
