use std::path::PathBuf;

use async_trait::async_trait;
use log::warn;
use serde::Serialize;

use super::NotificationSink;
use crate::utils::file_io;
use crate::BackendSet;

#[derive(Serialize)]
struct TargetGroup<'a> {
    labels: Labels<'a>,
    targets: Vec<String>,
}

#[derive(Serialize)]
struct Labels<'a> {
    alias: &'a str,
}

/// Writes the backend set as a `{"labels":{"alias":..},"targets":[..]}`
/// document for a file-based monitoring discovery mechanism. The file is
/// replaced atomically (write temp sibling, then rename) so the monitoring
/// poller never observes a partial document.
pub struct MonitoringTargetFileSink {
    path: PathBuf,
    service_label: String,
}

impl MonitoringTargetFileSink {
    pub fn new(
        path: impl Into<PathBuf>,
        service_label: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            service_label: service_label.into(),
        }
    }

    pub(crate) fn render(
        &self,
        backends: &BackendSet,
    ) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(&TargetGroup {
            labels: Labels {
                alias: &self.service_label,
            },
            targets: backends.iter().map(ToString::to_string).collect(),
        })
    }
}

#[async_trait]
impl NotificationSink for MonitoringTargetFileSink {
    fn name(&self) -> &'static str {
        "monitoring-target-file"
    }

    async fn apply(
        &self,
        backends: &BackendSet,
    ) -> bool {
        let body = match self.render(backends) {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to serialize monitoring targets: {}", e);
                return false;
            }
        };
        match file_io::replace_file(&self.path, &body).await {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    "Failed to write monitoring target file {}: {}",
                    self.path.display(),
                    e
                );
                false
            }
        }
    }
}
