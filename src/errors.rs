// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the permission seam
//!
//! Only the permission provider can fail in a way the scanner has to
//! represent. Every other failure mode in the lifecycle (no device, denied
//! access, dropped detection batches) is a rendered state or a silent drop,
//! never an `Err`.

use std::fmt;

/// Errors reported by a [`crate::PermissionProvider`]
///
/// A failed request is never fatal: the scanner logs it and treats the
/// outcome as denied.
#[derive(Debug, Clone)]
pub enum PermissionError {
    /// The platform has a permission model but it could not be reached
    ProviderUnavailable(String),
    /// The request was started but failed before producing a decision
    RequestFailed(String),
}

impl fmt::Display for PermissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermissionError::ProviderUnavailable(msg) => {
                write!(f, "Permission provider unavailable: {}", msg)
            }
            PermissionError::RequestFailed(msg) => {
                write!(f, "Permission request failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for PermissionError {}

impl From<String> for PermissionError {
    fn from(msg: String) -> Self {
        PermissionError::RequestFailed(msg)
    }
}

impl From<&str> for PermissionError {
    fn from(msg: &str) -> Self {
        PermissionError::RequestFailed(msg.to_string())
    }
}
