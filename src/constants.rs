// SPDX-License-Identifier: GPL-3.0-only

//! Crate-wide constants

use std::time::Duration;

/// Pre-delay before the mount-time fade-in starts.
///
/// The fade that accompanies the initial permission check waits this long
/// before animating so the camera pipeline has a frame to show.
pub const FADE_MOUNT_DELAY: Duration = Duration::from_millis(1000);

/// Pre-delay before the tap-to-activate fade-in starts.
///
/// Kept short: the sensor is already warm when the user re-activates.
pub const FADE_ACTIVATE_DELAY: Duration = Duration::from_millis(10);

/// Default duration of the fade-in opacity animation.
///
/// Overridable via [`crate::ScannerConfig::fade_duration`].
pub const FADE_DURATION: Duration = Duration::from_millis(500);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_fade_starts_faster_than_mount_fade() {
        assert!(FADE_ACTIVATE_DELAY < FADE_MOUNT_DELAY);
    }

    #[test]
    fn test_fade_duration_nonzero() {
        assert!(!FADE_DURATION.is_zero());
    }
}
