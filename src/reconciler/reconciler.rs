use std::time::Duration;

use tokio::sync::watch;
use tracing::debug;
use tracing::error;
use tracing::info;
use tracing::warn;

use super::{DeliveryPolicy, DeliveryState, TickAction};
use crate::config::ReconcilerConfig;
use crate::directory::{ServiceDirectory, ServiceDirectoryReader};
use crate::sink::{apply_all, NotificationSink};
use crate::Result;

/// The scheduler tying reader, change detection and sinks together.
///
/// One cooperative loop, no overlapping ticks: every directory read, HTTP
/// call and file write completes before the next poll is scheduled. The
/// loop never terminates on its own; it stops only through the shutdown
/// channel. No error escapes the tick boundary.
pub struct Reconciler<D> {
    reader: ServiceDirectoryReader<D>,
    sinks: Vec<Box<dyn NotificationSink>>,
    policy: DeliveryPolicy,
    poll_interval: Duration,
    shutdown_signal: watch::Receiver<()>,
}

impl<D> Reconciler<D>
where
    D: ServiceDirectory,
{
    pub fn new(
        reader: ServiceDirectoryReader<D>,
        sinks: Vec<Box<dyn NotificationSink>>,
        settings: &ReconcilerConfig,
        shutdown_signal: watch::Receiver<()>,
    ) -> Self {
        Self {
            reader,
            sinks,
            policy: DeliveryPolicy {
                comparison: settings.comparison,
                base_delay_ticks: settings.base_delay_ticks,
                max_delay_ticks: settings.max_delay_ticks,
            },
            poll_interval: Duration::from_secs(settings.poll_interval_secs),
            shutdown_signal,
        }
    }

    /// Run until shutdown. The interval elapses before the very first read
    /// so the directory is not hammered right at boot.
    pub async fn run(&self) -> Result<()> {
        let mut state = DeliveryState::default();
        let mut shutdown_signal = self.shutdown_signal.clone();

        loop {
            tokio::select! {
                _ = shutdown_signal.changed() => {
                    warn!("[Reconciler] shutdown signal received.");
                    return Ok(());
                }

                _ = tokio::time::sleep(self.poll_interval) => {
                    self.run_tick(&mut state).await;
                }
            }
        }
    }

    /// One tick: read, plan, maybe deliver, log the observed set. A read
    /// failure skips the tick without touching the delivery state, so a
    /// pending delivery is still retried once the store is back.
    pub(crate) async fn run_tick(
        &self,
        state: &mut DeliveryState,
    ) {
        let current = match self.reader.read().await {
            Ok(set) => set,
            Err(e) => {
                error!("Failed to perform discovery scrape: {}", e);
                return;
            }
        };

        match state.plan(&current, &self.policy) {
            TickAction::Deliver => {
                let delivered = apply_all(&self.sinks, &current).await;
                if !delivered {
                    warn!(
                        "Delivery incomplete ({} consecutive failure(s)), will retry",
                        state.consecutive_failures() + 1
                    );
                }
                state.record_outcome(current.clone(), delivered, &self.policy);
            }
            TickAction::Hold => {
                state.tick_holdoff();
                debug!(
                    "Delivery pending, held back for {} more tick(s)",
                    state.holdoff_ticks()
                );
            }
            TickAction::Settle => {}
        }

        info!("Found active backends: [{}]", current);
    }
}
