use async_trait::async_trait;
use log::info;
use zookeeper_client as zk;

use super::ServiceDirectory;
use crate::{DirectoryError, Error, Result};

/// [`ServiceDirectory`] backed by a ZooKeeper ensemble. The session is
/// established once at startup and reused for every poll tick.
pub struct ZooKeeperDirectory {
    client: zk::Client,
}

impl ZooKeeperDirectory {
    /// `hosts`: comma-separated ensemble addresses, e.g. "zk1:2181,zk2:2181".
    pub async fn connect(hosts: &str) -> Result<Self> {
        let client = zk::Client::connect(hosts).await.map_err(unavailable)?;
        info!("Connected to coordination store at {}", hosts);
        Ok(Self { client })
    }
}

#[async_trait]
impl ServiceDirectory for ZooKeeperDirectory {
    async fn exists(
        &self,
        path: &str,
    ) -> Result<bool> {
        let stat = self.client.check_stat(path).await.map_err(unavailable)?;
        Ok(stat.is_some())
    }

    async fn list_children(
        &self,
        path: &str,
    ) -> Result<Vec<String>> {
        match self.client.list_children(path).await {
            Ok(children) => Ok(children),
            // Node removed between the exists check and the listing:
            // equivalent to an empty registration set for this tick.
            Err(zk::Error::NoNode) => Ok(Vec::new()),
            Err(e) => Err(unavailable(e)),
        }
    }

    async fn read_data(
        &self,
        path: &str,
    ) -> Result<Vec<u8>> {
        let (data, _stat) = self.client.get_data(path).await.map_err(unavailable)?;
        Ok(data)
    }
}

fn unavailable(e: impl std::fmt::Display) -> Error {
    DirectoryError::Unavailable(e.to_string()).into()
}
