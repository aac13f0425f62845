//! Error types for the Stagehand protocol layer.

mod agent;
mod device;
mod provider;

pub use agent::*;
pub use device::*;
pub use provider::*;
