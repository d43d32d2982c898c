mod backend;
mod config;
mod directory;
mod errors;
mod reconciler;
mod sink;
pub mod utils;

pub use backend::*;
pub use config::*;
pub use directory::*;
pub use errors::*;
pub use reconciler::*;
pub use sink::*;

//-----------------------------------------------------------
// Test utils

#[cfg(test)]
pub mod test_utils;
