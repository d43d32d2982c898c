//! Backend membership model: the instances observed for one service at one
//! poll tick, and the change detection that decides whether downstream
//! consumers need a fresh delivery.

#[cfg(test)]
mod backend_test;

use std::fmt;

use serde::Deserialize;

/// One live service registration: a semantic `(address, port)` pair.
/// Equality is structural. Unknown payload fields are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
pub struct ServiceInstance {
    pub address: String,
    pub port: u16,
}

impl ServiceInstance {
    pub fn new(
        address: impl Into<String>,
        port: u16,
    ) -> Self {
        Self {
            address: address.into(),
            port,
        }
    }
}

impl fmt::Display for ServiceInstance {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}:{}", self.address, self.port)
    }
}

/// The instances registered under one service, in directory enumeration
/// order. The store does not keep that order stable across polls even when
/// membership is unchanged, which is why [`Comparison::Canonical`] exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendSet(Vec<ServiceInstance>);

impl BackendSet {
    pub fn new(instances: Vec<ServiceInstance>) -> Self {
        Self(instances)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ServiceInstance> {
        self.0.iter()
    }
}

impl From<Vec<ServiceInstance>> for BackendSet {
    fn from(instances: Vec<ServiceInstance>) -> Self {
        Self(instances)
    }
}

impl fmt::Display for BackendSet {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let mut first = true;
        for instance in &self.0 {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", instance)?;
            first = false;
        }
        Ok(())
    }
}

/// How two backend sets are compared between ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    /// Order-independent membership comparison. Avoids spurious re-delivery
    /// caused by enumeration-order jitter in the store.
    #[default]
    Canonical,
    /// Strict element-wise sequence equality, kept for compatibility with
    /// consumers that expect re-delivery on reorder.
    Ordered,
}

impl Comparison {
    /// Pure structural comparison, no mutation of either set.
    pub fn has_changed(
        &self,
        previous: &BackendSet,
        current: &BackendSet,
    ) -> bool {
        match self {
            Comparison::Ordered => previous != current,
            Comparison::Canonical => {
                if previous.len() != current.len() {
                    return true;
                }
                let mut prev: Vec<&ServiceInstance> = previous.iter().collect();
                let mut curr: Vec<&ServiceInstance> = current.iter().collect();
                prev.sort();
                curr.sort();
                prev != curr
            }
        }
    }
}
