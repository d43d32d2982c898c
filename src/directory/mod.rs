//! Coordination-store access: the `ServiceDirectory` capability, the
//! ZooKeeper-backed implementation, and the reader that turns raw child
//! nodes into a normalized [`BackendSet`](crate::BackendSet).

mod reader;
mod zookeeper;
pub use reader::*;
pub use zookeeper::*;


use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::Result;

/// Read-only view of the coordination store. One long-lived handle is shared
/// across ticks; implementations must not reconnect per call.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ServiceDirectory: Send + Sync {
    async fn exists(
        &self,
        path: &str,
    ) -> Result<bool>;

    /// Child node names in store enumeration order. The order is not stable
    /// across polls even for unchanged membership.
    async fn list_children(
        &self,
        path: &str,
    ) -> Result<Vec<String>>;

    async fn read_data(
        &self,
        path: &str,
    ) -> Result<Vec<u8>>;
}

/// `/discovery/<service>`
pub(crate) fn service_path(service_name: &str) -> String {
    format!("/discovery/{}", service_name)
}

/// `/discovery/<service>/<instance>`
pub(crate) fn instance_path(
    service_name: &str,
    instance_name: &str,
) -> String {
    format!("{}/{}", service_path(service_name), instance_name)
}
