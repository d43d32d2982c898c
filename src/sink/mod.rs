//! Downstream consumers of the backend set. Every sink receives every
//! delivery; a sink failure is reported as `false` and never aborts the
//! loop, it only forces a retry on a later tick.

mod load_balancer;
mod target_file;
pub use load_balancer::*;
pub use target_file::*;


use async_trait::async_trait;
use log::{debug, warn};
#[cfg(test)]
use mockall::automock;

use crate::BackendSet;

/// A downstream target that must be kept in sync with the current backend
/// set. `apply` captures every expected failure mode (non-2xx responses,
/// I/O errors) and reports it as `false`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NotificationSink: Send + Sync {
    fn name(&self) -> &'static str;

    async fn apply(
        &self,
        backends: &BackendSet,
    ) -> bool;
}

/// Deliver to every sink, no short-circuit. The aggregate is the logical
/// AND of the individual results.
pub(crate) async fn apply_all(
    sinks: &[Box<dyn NotificationSink>],
    backends: &BackendSet,
) -> bool {
    let mut all_ok = true;
    for sink in sinks {
        if sink.apply(backends).await {
            debug!("Sink {} applied {} backend(s)", sink.name(), backends.len());
        } else {
            warn!("Sink {} failed to apply the current backend set", sink.name());
            all_ok = false;
        }
    }
    all_ok
}
