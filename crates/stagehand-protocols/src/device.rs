//! Device session facade.
//!
//! Implemented by platform adapters (Appium, CDP, ...) outside this
//! workspace. The core only consumes this trait; it holds exclusive use of
//! one session per orchestrator for the session's lifetime.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::DeviceError;
use crate::pointer::PointerSequence;

/// Physical device orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Facade over a connected browser or mobile device.
///
/// Viewport dimensions are fixed after connect. `disconnect` is idempotent.
/// Pointer methods must support at least two simultaneous contacts via
/// [`DeviceSession::perform_multi_pointer`].
#[async_trait]
pub trait DeviceSession: Send + Sync {
    /// Viewport width in device pixels.
    fn viewport_width(&self) -> u32;

    /// Viewport height in device pixels.
    fn viewport_height(&self) -> u32;

    async fn disconnect(&self) -> Result<(), DeviceError>;

    /// Capture the current screen as a base64-encoded PNG.
    async fn screenshot_base64(&self) -> Result<String, DeviceError>;

    async fn press_home(&self) -> Result<(), DeviceError>;

    async fn press_back(&self) -> Result<(), DeviceError>;

    /// Launch an app by bundle ID (iOS) or package name (Android).
    async fn launch_app(&self, app_id: &str) -> Result<(), DeviceError>;

    async fn open_url(&self, url: &str) -> Result<(), DeviceError>;

    async fn hide_keyboard(&self) -> Result<(), DeviceError>;

    /// Send keystrokes to the focused element.
    async fn send_keys(&self, text: &str) -> Result<(), DeviceError>;

    async fn orientation(&self) -> Result<Orientation, DeviceError>;

    async fn set_orientation(&self, orientation: Orientation) -> Result<(), DeviceError>;

    /// Current view hierarchy as XML.
    async fn page_source(&self) -> Result<String, DeviceError>;

    /// Run a single-contact pointer sequence to completion.
    async fn perform_pointer(&self, sequence: &PointerSequence) -> Result<(), DeviceError>;

    /// Run several pointer sequences as simultaneous contacts.
    async fn perform_multi_pointer(
        &self,
        sequences: &[PointerSequence],
    ) -> Result<(), DeviceError>;
}
