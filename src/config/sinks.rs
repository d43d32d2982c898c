use serde::Deserialize;

use crate::{Error, Result};

#[derive(Debug, Deserialize, Clone)]
pub struct LoadBalancerConfig {
    /// Load balancers to notify, as `host:port`. Every endpoint receives
    /// every update; one failing endpoint does not stop the others.
    #[serde(default = "default_endpoints")]
    pub endpoints: Vec<String>,
}

impl Default for LoadBalancerConfig {
    fn default() -> Self {
        Self {
            endpoints: default_endpoints(),
        }
    }
}

impl LoadBalancerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.endpoints.is_empty() {
            return Err(Error::InvalidConfig(
                "load_balancer.endpoints must not be empty".into(),
            ));
        }
        for endpoint in &self.endpoints {
            if endpoint.trim().is_empty() {
                return Err(Error::InvalidConfig(
                    "load_balancer.endpoints contains an empty entry".into(),
                ));
            }
        }
        Ok(())
    }
}

fn default_endpoints() -> Vec<String> {
    vec!["127.0.0.1:8001".to_string()]
}
