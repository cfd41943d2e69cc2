// SPDX-License-Identifier: GPL-3.0-only

//! Haptic feedback abstraction
//!
//! An accepted detection may trigger a short vibration pulse. Platforms
//! without a vibration motor plug in [`NoopHaptics`].

/// Haptic feedback seam
pub trait Haptics: Send {
    /// Fire a single short feedback pulse
    fn pulse(&mut self);
}

/// Haptics implementation that does nothing
#[derive(Debug, Default)]
pub struct NoopHaptics;

impl Haptics for NoopHaptics {
    fn pulse(&mut self) {}
}
