use serde::Deserialize;

/// Coordination-store connection settings. `hosts` is the one option with
/// no default: the daemon refuses to start without it.
#[derive(Debug, Deserialize, Clone)]
pub struct DirectoryConfig {
    /// Comma-separated coordination-store address list, e.g. "zk1:2181,zk2:2181"
    pub hosts: String,

    /// Service whose registrations are reconciled
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

fn default_service_name() -> String {
    "Easydb".to_string()
}
