// SPDX-License-Identifier: GPL-3.0-only

//! scancam - camera lifecycle control for scannable-code readers
//!
//! This library implements the permission/activation/detection state machine
//! that sits between a host UI and its camera + code-decoder collaborators:
//! it tracks camera-use permission, gates when the sensor is active versus
//! idle, and debounces per-frame detection events so a single physical code
//! is reported once per unlock cycle.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`scanner`]: The scanner component, its message dispatcher and handle
//! - [`backends`]: Permission, camera and haptics collaborator traits
//! - [`config`]: Scanner configuration
//! - [`constants`]: Fade timing defaults
//! - [`errors`]: Error types for the permission seam
//!
//! # Example
//!
//! ```ignore
//! let handle = Scanner::spawn(
//!     ScannerConfig::default(),
//!     &AutoGrant,
//!     &backend,
//!     Box::new(NoopHaptics),
//!     Box::new(|code| println!("read: {}", code.data)),
//! );
//! ```

pub mod backends;
pub mod config;
pub mod constants;
pub mod errors;
pub mod scanner;

// Re-export commonly used types
pub use backends::camera::{
    CameraBackend, CameraDevice, CameraFacing, CodeDescriptor, CodeType, TorchMode,
};
pub use backends::haptics::{Haptics, NoopHaptics};
pub use backends::permission::{AutoGrant, PermissionPrompt, PermissionProvider, PermissionStatus};
pub use config::ScannerConfig;
pub use errors::PermissionError;
pub use scanner::{
    FadeTransition, Message, OnRead, PermissionState, Scanner, ScannerHandle, TimerKind, Viewport,
};
