// SPDX-License-Identifier: GPL-3.0-only

//! Permission provider abstraction
//!
//! Camera-use permission is requested once per scanner lifetime. The request
//! is asynchronous and is never cancelled; its continuation is delivered to
//! the scanner as a message, so a late completion after teardown is simply
//! never observed.

use crate::errors::PermissionError;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

/// Outcome of a permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    /// Camera use granted
    Authorized,
    /// Camera use refused by the user or the platform
    Denied,
}

/// Copy forwarded to the platform permission dialog
///
/// Only used on platforms whose permission prompt requires explicit copy;
/// other providers are free to ignore it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PermissionPrompt {
    /// Dialog title
    pub title: String,
    /// Dialog message body
    pub message: String,
    /// Label of the affirmative button
    pub button_positive: String,
}

impl Default for PermissionPrompt {
    fn default() -> Self {
        Self {
            title: "Info".to_string(),
            message: "Need camera permission".to_string(),
            button_positive: "OK".to_string(),
        }
    }
}

/// Asynchronous camera-use permission provider
///
/// A failed request is treated as a denial by the scanner; implementations
/// should reserve `Err` for transport-level failures and report an actual
/// user refusal as `Ok(PermissionStatus::Denied)`.
pub trait PermissionProvider: Send + Sync {
    /// Request camera-use permission, showing a platform prompt if needed
    fn request(
        &self,
        prompt: PermissionPrompt,
    ) -> BoxFuture<'static, Result<PermissionStatus, PermissionError>>;
}

/// Provider for platforms without an explicit permission model
///
/// Always grants immediately.
pub struct AutoGrant;

impl PermissionProvider for AutoGrant {
    fn request(
        &self,
        _prompt: PermissionPrompt,
    ) -> BoxFuture<'static, Result<PermissionStatus, PermissionError>> {
        Box::pin(async { Ok(PermissionStatus::Authorized) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_auto_grant_authorizes() {
        let status = AutoGrant.request(PermissionPrompt::default()).await;
        assert_eq!(status.unwrap(), PermissionStatus::Authorized);
    }
}
