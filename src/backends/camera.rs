// SPDX-License-Identifier: GPL-3.0-only

//! Camera backend abstraction
//!
//! The scanner only needs two things from a camera backend: whether a device
//! exists for the requested facing direction, and the shape of the decoded
//! codes the backend's decoder hands up while the camera surface is mounted.
//! Frame capture and symbology decoding stay on the backend's side of the
//! seam.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Requested camera facing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CameraFacing {
    /// Rear camera (default)
    #[default]
    Back,
    /// Selfie camera
    Front,
}

impl fmt::Display for CameraFacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraFacing::Back => write!(f, "back"),
            CameraFacing::Front => write!(f, "front"),
        }
    }
}

/// Torch mode, forwarded to the camera backend verbatim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TorchMode {
    /// Torch off (default)
    #[default]
    Off,
    /// Torch on while the camera surface is mounted
    On,
}

impl fmt::Display for TorchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TorchMode::Off => write!(f, "off"),
            TorchMode::On => write!(f, "on"),
        }
    }
}

/// Code symbologies the decoder can be asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CodeType {
    /// QR code (default)
    #[default]
    Qr,
    /// EAN-13 barcode
    Ean13,
    /// Code 128 barcode
    Code128,
}

/// An opaque decoded-code descriptor handed up from the decoder
///
/// Symbology plus payload; the scanner never inspects the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeDescriptor {
    /// Symbology of the decoded code
    pub code_type: CodeType,
    /// Decoded payload
    pub data: String,
}

impl CodeDescriptor {
    /// Convenience constructor for a QR descriptor
    pub fn qr(data: impl Into<String>) -> Self {
        Self {
            code_type: CodeType::Qr,
            data: data.into(),
        }
    }
}

/// A physical camera device known to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraDevice {
    /// Backend-specific identifier
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Facing direction of the sensor
    pub facing: CameraFacing,
}

/// Camera backend trait
///
/// Implementations enumerate the devices the platform exposes. The scanner
/// treats the absence of a device for the requested facing as a permanent
/// precondition and renders nothing for the camera region.
pub trait CameraBackend: Send + Sync {
    /// Enumerate available camera devices
    fn enumerate_devices(&self) -> Vec<CameraDevice>;

    /// Find a device matching the given facing direction
    fn device_for(&self, facing: CameraFacing) -> Option<CameraDevice> {
        self.enumerate_devices()
            .into_iter()
            .find(|device| device.facing == facing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedBackend(Vec<CameraDevice>);

    impl CameraBackend for FixedBackend {
        fn enumerate_devices(&self) -> Vec<CameraDevice> {
            self.0.clone()
        }
    }

    fn device(id: &str, facing: CameraFacing) -> CameraDevice {
        CameraDevice {
            id: id.to_string(),
            name: format!("Camera {}", id),
            facing,
        }
    }

    #[test]
    fn test_device_for_matches_facing() {
        let backend = FixedBackend(vec![
            device("0", CameraFacing::Front),
            device("1", CameraFacing::Back),
        ]);

        let found = backend.device_for(CameraFacing::Back);
        assert_eq!(found.map(|d| d.id), Some("1".to_string()));
    }

    #[test]
    fn test_device_for_missing_facing() {
        let backend = FixedBackend(vec![device("0", CameraFacing::Front)]);
        assert!(backend.device_for(CameraFacing::Back).is_none());
    }
}
