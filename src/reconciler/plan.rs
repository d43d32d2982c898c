//! Pure per-tick decision logic, separated from the loop so it can be
//! exercised with synthetic readings and sink outcomes.

use crate::backend::{BackendSet, Comparison};

/// How deliveries are paced. `base_delay_ticks = 0` disables backoff:
/// a failed delivery is retried on every tick, the historical behavior.
#[derive(Debug, Clone, Copy)]
pub struct DeliveryPolicy {
    pub comparison: Comparison,
    pub base_delay_ticks: u32,
    pub max_delay_ticks: u32,
}

impl Default for DeliveryPolicy {
    fn default() -> Self {
        Self {
            comparison: Comparison::default(),
            base_delay_ticks: 0,
            max_delay_ticks: 60,
        }
    }
}

/// What a tick should do with the freshly read backend set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickAction {
    /// Push the current set to every sink.
    Deliver,
    /// Delivery is pending but held back by the failure backoff.
    Hold,
    /// The current set is already applied everywhere.
    Settle,
}

/// Loop-owned delivery state. `last_delivery_ok` starts false so the very
/// first tick always delivers, even when the observed set equals the empty
/// initial one. Mutated at most once per tick, only after delivery was
/// attempted (or held off).
#[derive(Debug, Clone, Default)]
pub struct DeliveryState {
    last_applied: BackendSet,
    last_delivery_ok: bool,
    consecutive_failures: u32,
    holdoff_ticks: u32,
}

impl DeliveryState {
    /// Decide the action for a tick. Two axes: did the content change, and
    /// did the last delivery succeed. A content change always delivers
    /// immediately, bypassing any holdoff.
    pub fn plan(
        &self,
        current: &BackendSet,
        policy: &DeliveryPolicy,
    ) -> TickAction {
        if policy.comparison.has_changed(&self.last_applied, current) {
            return TickAction::Deliver;
        }
        if self.last_delivery_ok {
            return TickAction::Settle;
        }
        if self.holdoff_ticks > 0 {
            TickAction::Hold
        } else {
            TickAction::Deliver
        }
    }

    /// Fold a delivery attempt back into the state.
    pub fn record_outcome(
        &mut self,
        current: BackendSet,
        delivered: bool,
        policy: &DeliveryPolicy,
    ) {
        self.last_applied = current;
        self.last_delivery_ok = delivered;
        if delivered {
            self.consecutive_failures = 0;
            self.holdoff_ticks = 0;
        } else {
            self.consecutive_failures = self.consecutive_failures.saturating_add(1);
            self.holdoff_ticks = backoff_ticks(policy, self.consecutive_failures);
        }
    }

    /// Consume one tick of an active holdoff.
    pub fn tick_holdoff(&mut self) {
        self.holdoff_ticks = self.holdoff_ticks.saturating_sub(1);
    }

    pub fn last_applied(&self) -> &BackendSet {
        &self.last_applied
    }

    pub fn last_delivery_ok(&self) -> bool {
        self.last_delivery_ok
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    pub fn holdoff_ticks(&self) -> u32 {
        self.holdoff_ticks
    }
}

/// Bounded exponential schedule: base * 2^(n-1), capped at max. The cap
/// keeps the at-least-once guarantee: retries never stop, they only
/// spread out.
fn backoff_ticks(
    policy: &DeliveryPolicy,
    failures: u32,
) -> u32 {
    if policy.base_delay_ticks == 0 || failures == 0 {
        return 0;
    }
    let exp = failures.saturating_sub(1).min(16);
    policy
        .base_delay_ticks
        .saturating_mul(1u32 << exp)
        .min(policy.max_delay_ticks)
}
