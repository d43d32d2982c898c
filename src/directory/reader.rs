use log::warn;

use super::{instance_path, service_path, ServiceDirectory};
use crate::{BackendSet, DirectoryError, Result, ServiceInstance};

/// Turns the raw child registrations of one service into a [`BackendSet`].
pub struct ServiceDirectoryReader<D> {
    directory: D,
    service_name: String,
}

impl<D> ServiceDirectoryReader<D>
where
    D: ServiceDirectory,
{
    pub fn new(
        directory: D,
        service_name: impl Into<String>,
    ) -> Self {
        Self {
            directory,
            service_name: service_name.into(),
        }
    }

    /// Read the current backend set.
    ///
    /// An absent service path is a valid state (cold start, nothing
    /// registered yet) and yields an empty set. Store failures propagate as
    /// [`DirectoryError::Unavailable`]; a registration that does not decode
    /// is logged and skipped, the remaining children are still read.
    pub async fn read(&self) -> Result<BackendSet> {
        let root = service_path(&self.service_name);
        if !self.directory.exists(&root).await? {
            return Ok(BackendSet::default());
        }

        let children = self.directory.list_children(&root).await?;
        let mut instances = Vec::with_capacity(children.len());
        for child in children {
            let path = instance_path(&self.service_name, &child);
            let data = self.directory.read_data(&path).await?;
            match parse_registration(&path, &data) {
                Ok(instance) => instances.push(instance),
                Err(e) => warn!("Skipping registration: {}", e),
            }
        }
        Ok(BackendSet::from(instances))
    }
}

/// Registration payloads are JSON objects with at least `address` and
/// `port`; unknown fields are ignored.
fn parse_registration(
    path: &str,
    data: &[u8],
) -> std::result::Result<ServiceInstance, DirectoryError> {
    serde_json::from_slice(data).map_err(|e| DirectoryError::MalformedRegistration {
        path: path.to_string(),
        reason: e.to_string(),
    })
}
