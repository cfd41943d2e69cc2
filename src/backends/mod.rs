// SPDX-License-Identifier: GPL-3.0-only

//! Collaborator abstractions
//!
//! The scanner core never talks to platform APIs directly. Everything that
//! touches the outside world sits behind one of three trait seams:
//!
//! ```text
//! ┌─────────────────────┐
//! │   Scanner (core)    │
//! └──────────┬──────────┘
//!            │
//!     ┌──────┼───────────────────┐
//!     ▼      ▼                   ▼
//! ┌────────────────┐ ┌───────────────┐ ┌─────────┐
//! │PermissionProvider│ │ CameraBackend │ │ Haptics │
//! └────────────────┘ └───────────────┘ └─────────┘
//! ```
//!
//! - [`permission::PermissionProvider`]: asynchronous camera-use permission
//! - [`camera::CameraBackend`]: device enumeration and the decoded-code types
//! - [`haptics::Haptics`]: feedback pulse on an accepted detection

pub mod camera;
pub mod haptics;
pub mod permission;

pub use camera::{CameraBackend, CameraDevice, CameraFacing, CodeDescriptor, CodeType, TorchMode};
pub use haptics::{Haptics, NoopHaptics};
pub use permission::{AutoGrant, PermissionPrompt, PermissionProvider, PermissionStatus};
