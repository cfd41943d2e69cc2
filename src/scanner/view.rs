// SPDX-License-Identifier: GPL-3.0-only

//! Viewport derivation
//!
//! The scanner does not render. It publishes a [`Viewport`] value describing
//! what the host should mount for the camera region, derived from the model
//! on every state change.

use crate::backends::camera::{CameraDevice, CameraFacing, TorchMode};
use crate::scanner::state::{FadeTransition, ScannerModel};

/// Rendering contract for the camera region
#[derive(Debug, Clone, PartialEq)]
pub enum Viewport {
    /// No device matches the requested facing; render nothing
    Hidden,
    /// Camera is idle; render the tap-to-activate surface
    Inactive {
        /// Placeholder copy for the surface
        label: String,
    },
    /// Permission check still pending
    PendingAuthorization {
        /// Placeholder copy for the surface
        label: String,
    },
    /// Permission check completed with a denial
    NotAuthorized {
        /// Placeholder copy for the surface
        label: String,
    },
    /// Mount the live camera surface
    Camera {
        /// The device to mount
        device: CameraDevice,
        /// Requested facing direction
        facing: CameraFacing,
        /// Torch mode, forwarded verbatim
        torch: TorchMode,
        /// Whether to draw the detection-marker overlay
        show_marker: bool,
        /// Fade-in transition; `None` means fully opaque
        fade: Option<FadeTransition>,
    },
}

impl Viewport {
    /// Current opacity of the camera surface, if one is mounted
    pub fn camera_opacity(&self) -> Option<f32> {
        match self {
            Viewport::Camera { fade, .. } => {
                Some(fade.as_ref().map(|fade| fade.opacity()).unwrap_or(1.0))
            }
            _ => None,
        }
    }
}

impl ScannerModel {
    /// Derive the rendering contract from the current state
    pub(crate) fn viewport(&self) -> Viewport {
        let Some(device) = &self.device else {
            return Viewport::Hidden;
        };

        if !self.camera_active {
            return Viewport::Inactive {
                label: self.config.placeholders.tap_to_activate.clone(),
            };
        }

        if self.permission.is_authorized() {
            return Viewport::Camera {
                device: device.clone(),
                facing: self.config.camera_type,
                torch: self.config.torch,
                show_marker: self.config.show_marker,
                fade: self.fade,
            };
        }

        if !self.permission.is_checked() {
            Viewport::PendingAuthorization {
                label: self.config.placeholders.pending_authorization.clone(),
            }
        } else {
            Viewport::NotAuthorized {
                label: self.config.placeholders.not_authorized.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::haptics::NoopHaptics;
    use crate::config::ScannerConfig;
    use crate::scanner::state::PermissionState;
    use tokio::sync::mpsc;

    fn model(device: Option<CameraDevice>) -> ScannerModel {
        let (tx, _rx) = mpsc::unbounded_channel();
        ScannerModel::new(
            ScannerConfig::default(),
            device,
            Box::new(NoopHaptics),
            Box::new(|_| {}),
            tx.downgrade(),
        )
    }

    fn back_device() -> CameraDevice {
        CameraDevice {
            id: "cam0".to_string(),
            name: "Back Camera".to_string(),
            facing: CameraFacing::Back,
        }
    }

    #[test]
    fn test_no_device_renders_nothing() {
        let mut model = model(None);
        model.permission = PermissionState::Authorized;
        assert_eq!(model.viewport(), Viewport::Hidden);

        // Regardless of activation state
        model.camera_active = false;
        assert_eq!(model.viewport(), Viewport::Hidden);
    }

    #[test]
    fn test_inactive_wins_over_permission_states() {
        let mut model = model(Some(back_device()));
        model.camera_active = false;

        for permission in [
            PermissionState::Unchecked,
            PermissionState::Checking,
            PermissionState::Authorized,
            PermissionState::Denied,
        ] {
            model.permission = permission;
            assert!(matches!(model.viewport(), Viewport::Inactive { .. }));
        }
    }

    #[test]
    fn test_active_viewport_follows_permission() {
        let mut model = model(Some(back_device()));

        model.permission = PermissionState::Unchecked;
        assert!(matches!(
            model.viewport(),
            Viewport::PendingAuthorization { .. }
        ));

        model.permission = PermissionState::Checking;
        assert!(matches!(
            model.viewport(),
            Viewport::PendingAuthorization { .. }
        ));

        model.permission = PermissionState::Denied;
        assert!(matches!(model.viewport(), Viewport::NotAuthorized { .. }));

        model.permission = PermissionState::Authorized;
        assert!(matches!(model.viewport(), Viewport::Camera { .. }));
    }

    #[test]
    fn test_camera_viewport_forwards_torch_and_marker() {
        let mut model = model(Some(back_device()));
        model.permission = PermissionState::Authorized;
        model.config.torch = crate::backends::camera::TorchMode::On;
        model.config.show_marker = true;

        let Viewport::Camera {
            torch, show_marker, ..
        } = model.viewport()
        else {
            panic!("expected a camera viewport");
        };
        assert_eq!(torch, crate::backends::camera::TorchMode::On);
        assert!(show_marker);
    }

    #[test]
    fn test_opacity_without_fade_is_opaque() {
        let mut model = model(Some(back_device()));
        model.permission = PermissionState::Authorized;
        model.fade = None;
        assert_eq!(model.viewport().camera_opacity(), Some(1.0));
    }
}
