//! The reconciliation loop: poll the directory, detect change, deliver to
//! every sink, and retry until every sink has accepted the current set.

mod plan;
mod reconciler;
pub use plan::*;
pub use reconciler::*;
