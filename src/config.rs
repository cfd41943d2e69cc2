// SPDX-License-Identifier: GPL-3.0-only

//! Scanner configuration

use crate::backends::camera::{CameraFacing, CodeType, TorchMode};
use crate::backends::permission::PermissionPrompt;
use crate::constants;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Placeholder copy for the non-camera viewport states
///
/// The host renders these however it likes; the scanner only decides which
/// one applies at any moment.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderCopy {
    /// Shown when the permission check completed with a denial
    pub not_authorized: String,
    /// Shown while the permission check is still pending
    pub pending_authorization: String,
    /// Shown on the tap-to-activate surface while the camera is idle
    pub tap_to_activate: String,
}

impl Default for PlaceholderCopy {
    fn default() -> Self {
        Self {
            not_authorized: "Camera not authorized".to_string(),
            pending_authorization: "...".to_string(),
            tap_to_activate: "Tap to activate camera".to_string(),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Haptic feedback on an accepted detection
    pub vibrate: bool,
    /// Automatically release the scan lock after an accepted detection
    pub reactivate: bool,
    /// Delay before the automatic scan-lock release (may be zero)
    pub reactivate_timeout: Duration,
    /// Idle delay after which an active camera deactivates (zero = disabled)
    pub camera_timeout: Duration,
    /// Fade the camera surface in when it becomes active
    pub fade_in: bool,
    /// Duration of the fade-in opacity animation
    pub fade_duration: Duration,
    /// Requested camera facing direction
    pub camera_type: CameraFacing,
    /// Torch mode, forwarded to the camera provider verbatim
    pub torch: TorchMode,
    /// Render a detection-marker overlay on the camera surface
    pub show_marker: bool,
    /// Code symbologies requested from the decoder
    pub code_types: Vec<CodeType>,
    /// Copy forwarded to the platform permission prompt where applicable
    pub prompt: PermissionPrompt,
    /// Copy for the not-authorized / pending / inactive surfaces
    pub placeholders: PlaceholderCopy,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            vibrate: true,
            reactivate: false,
            reactivate_timeout: Duration::ZERO,
            camera_timeout: Duration::ZERO, // Disabled by default
            fade_in: true,
            fade_duration: constants::FADE_DURATION,
            camera_type: CameraFacing::default(), // Back camera
            torch: TorchMode::default(),          // Off
            show_marker: false,
            code_types: vec![CodeType::Qr],
            prompt: PermissionPrompt::default(),
            placeholders: PlaceholderCopy::default(),
        }
    }
}

impl ScannerConfig {
    /// Whether idle auto-deactivation is enabled
    pub fn idle_timeout_enabled(&self) -> bool {
        !self.camera_timeout.is_zero()
    }
}
