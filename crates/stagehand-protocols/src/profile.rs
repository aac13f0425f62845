//! Device profiles and platform identifiers.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::AgentError;

/// Preset used when no device is specified.
pub const DEFAULT_PROFILE_KEY: &str = "iphone_15_pro";

/// Supported mobile platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MobilePlatform {
    #[serde(rename = "iOS")]
    Ios,
    #[serde(rename = "Android")]
    Android,
}

impl fmt::Display for MobilePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ios => write!(f, "iOS"),
            Self::Android => write!(f, "Android"),
        }
    }
}

/// Immutable device descriptor, fixed at agent construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceProfile {
    pub name: String,
    pub platform: MobilePlatform,
    pub viewport_width: u32,
    pub viewport_height: u32,
    #[serde(default = "default_scale_factor")]
    pub device_scale_factor: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_version: Option<String>,
}

fn default_scale_factor() -> f64 {
    1.0
}

impl DeviceProfile {
    pub fn new(
        name: impl Into<String>,
        platform: MobilePlatform,
        viewport_width: u32,
        viewport_height: u32,
    ) -> Self {
        Self {
            name: name.into(),
            platform,
            viewport_width,
            viewport_height,
            device_scale_factor: default_scale_factor(),
            platform_version: None,
        }
    }

    pub fn with_scale_factor(mut self, scale: f64) -> Self {
        self.device_scale_factor = scale;
        self
    }

    pub fn with_platform_version(mut self, version: impl Into<String>) -> Self {
        self.platform_version = Some(version.into());
        self
    }
}

/// Pre-configured profiles for common devices.
pub static DEVICE_PROFILES: Lazy<HashMap<&'static str, DeviceProfile>> = Lazy::new(|| {
    let mut profiles = HashMap::new();

    // iOS devices
    profiles.insert(
        "iphone_15_pro",
        DeviceProfile::new("iPhone 15 Pro", MobilePlatform::Ios, 393, 852)
            .with_scale_factor(3.0)
            .with_platform_version("17.0"),
    );
    profiles.insert(
        "iphone_15",
        DeviceProfile::new("iPhone 15", MobilePlatform::Ios, 393, 852)
            .with_scale_factor(3.0)
            .with_platform_version("17.0"),
    );
    profiles.insert(
        "iphone_se",
        DeviceProfile::new("iPhone SE", MobilePlatform::Ios, 375, 667)
            .with_scale_factor(2.0)
            .with_platform_version("17.0"),
    );
    profiles.insert(
        "iphone_14_pro_max",
        DeviceProfile::new("iPhone 14 Pro Max", MobilePlatform::Ios, 430, 932)
            .with_scale_factor(3.0)
            .with_platform_version("16.0"),
    );
    profiles.insert(
        "ipad_pro_12_9",
        DeviceProfile::new("iPad Pro 12.9", MobilePlatform::Ios, 1024, 1366)
            .with_scale_factor(2.0)
            .with_platform_version("17.0"),
    );
    profiles.insert(
        "ipad_air",
        DeviceProfile::new("iPad Air", MobilePlatform::Ios, 820, 1180)
            .with_scale_factor(2.0)
            .with_platform_version("17.0"),
    );

    // Android devices
    profiles.insert(
        "pixel_8",
        DeviceProfile::new("Pixel 8", MobilePlatform::Android, 412, 915)
            .with_scale_factor(2.625)
            .with_platform_version("14"),
    );
    profiles.insert(
        "pixel_8_pro",
        DeviceProfile::new("Pixel 8 Pro", MobilePlatform::Android, 448, 998)
            .with_scale_factor(2.625)
            .with_platform_version("14"),
    );
    profiles.insert(
        "pixel_7",
        DeviceProfile::new("Pixel 7", MobilePlatform::Android, 412, 915)
            .with_scale_factor(2.625)
            .with_platform_version("13"),
    );
    profiles.insert(
        "samsung_galaxy_s24",
        DeviceProfile::new("Samsung Galaxy S24", MobilePlatform::Android, 360, 780)
            .with_scale_factor(3.0)
            .with_platform_version("14"),
    );
    profiles.insert(
        "samsung_galaxy_s24_ultra",
        DeviceProfile::new("Samsung Galaxy S24 Ultra", MobilePlatform::Android, 384, 824)
            .with_scale_factor(3.0)
            .with_platform_version("14"),
    );
    profiles.insert(
        "galaxy_tab_s9",
        DeviceProfile::new("Galaxy Tab S9", MobilePlatform::Android, 800, 1280)
            .with_scale_factor(2.0)
            .with_platform_version("14"),
    );

    profiles
});

/// Look up a profile by key, listing the available keys on a miss.
pub fn device_profile(key: &str) -> Result<DeviceProfile, AgentError> {
    DEVICE_PROFILES.get(key).cloned().ok_or_else(|| {
        let mut available: Vec<&str> = DEVICE_PROFILES.keys().copied().collect();
        available.sort_unstable();
        AgentError::UnknownDeviceProfile {
            key: key.to_string(),
            available: available.join(", "),
        }
    })
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;
