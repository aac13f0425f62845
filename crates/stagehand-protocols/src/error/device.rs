//! Device session errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("Not connected to a device")]
    NotConnected,

    #[error("Gesture failed: {0}")]
    Gesture(String),

    #[error("Screenshot failed: {0}")]
    Screenshot(String),

    #[error("Input failed: {0}")]
    Input(String),

    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("Session error: {0}")]
    Session(String),
}
