// SPDX-License-Identifier: GPL-3.0-only

//! Activation controller handlers
//!
//! The camera starts active. Deactivation comes from a manual pause or the
//! idle timer; reactivation comes from the tap-to-activate surface. Either
//! direction drops any stale scan lock and fade.

use crate::constants;
use crate::scanner::state::{FadeTransition, ScannerModel};
use tracing::{debug, info};

impl ScannerModel {
    /// Activate or deactivate the camera
    ///
    /// Always resets the scan lock and the fade transition, even when the
    /// activation state does not change, so a tap after a stale lock is
    /// guaranteed to leave the debouncer ready. Activation replaces the fade
    /// wholesale; nothing scheduled before the toggle can apply afterwards.
    pub(crate) fn handle_set_camera(&mut self, active: bool) {
        debug!(active, was_active = self.camera_active, "Camera activation toggled");

        self.camera_active = active;
        self.scan_lock = false;
        self.fade = None;

        if active {
            if self.config.fade_in {
                self.fade = Some(FadeTransition::start(
                    constants::FADE_ACTIVATE_DELAY,
                    self.config.fade_duration,
                ));
            }
            // Re-entering Active cancels and rearms a pending idle timer
            if self.permission.is_authorized() && self.config.idle_timeout_enabled() {
                self.idle_timer.schedule(self.config.camera_timeout, &self.tx);
            }
        } else {
            self.idle_timer.cancel();
        }
    }

    /// Idle timer fired: deactivate the camera
    pub(crate) fn handle_idle_timeout(&mut self, generation: u64) {
        if !self.idle_timer.is_current(generation) {
            debug!(generation, "Ignoring stale idle timer fire");
            return;
        }
        info!(
            timeout_ms = self.config.camera_timeout.as_millis() as u64,
            "Camera idle timeout elapsed, deactivating"
        );
        self.handle_set_camera(false);
    }
}
