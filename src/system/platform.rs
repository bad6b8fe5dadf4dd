// src/system/platform.rs

use crate::models::Platform;

/// Determines the platform this binary is running on.
pub fn detect() -> Platform {
    let platform = Platform::from_os_name(std::env::consts::OS);
    log::debug!("Detected platform: {}", platform);
    platform
}
