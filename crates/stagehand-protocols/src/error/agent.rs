//! Agent-level errors.
//!
//! These surface synchronously at call time for configuration problems;
//! runtime failures inside the loop are reported through `AgentResult`.

use thiserror::Error;

use super::device::DeviceError;
use super::provider::ProviderError;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Not connected. Call connect() first.")]
    NotConnected,

    #[error("Unknown device profile: {key}. Available profiles: {available}")]
    UnknownDeviceProfile { key: String, available: String },

    #[error("API key not set. Provide it explicitly or via the environment.")]
    MissingApiKey,

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error(transparent)]
    Device(#[from] DeviceError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}
