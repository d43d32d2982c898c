//! Shared helpers for unit tests: logger setup, backend-set builders and a
//! minimal HTTP stub for exercising the load-balancer sink end to end.

mod common;
mod http_stub;

pub use common::*;
pub use http_stub::*;
