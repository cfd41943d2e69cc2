// SPDX-License-Identifier: GPL-3.0-only

//! Detection debouncer handlers
//!
//! One report per unlock cycle: the first descriptor of the first accepted
//! batch reaches the host, then the scan lock suppresses everything until
//! it is released by the reactivation timer or an explicit `reactivate()`.

use crate::backends::camera::CodeDescriptor;
use crate::scanner::state::ScannerModel;
use tracing::{debug, info};

impl ScannerModel {
    /// A batch of decoded codes arrived from the decoder
    pub(crate) fn handle_codes_detected(&mut self, codes: Vec<CodeDescriptor>) {
        let count = codes.len();
        // Codes beyond the first are discarded for this cycle; an empty
        // batch is ignored outright
        let Some(first) = codes.into_iter().next() else {
            return;
        };

        // The decoder is unmounted while inactive or unauthorized; a batch
        // arriving anyway must not take the scan lock
        if !self.camera_active || !self.permission.is_authorized() {
            debug!(
                count,
                active = self.camera_active,
                "Dropping detection batch while camera is unmounted"
            );
            return;
        }

        if self.scan_lock {
            debug!(count, "Dropping detection batch while locked");
            return;
        }

        if self.config.vibrate {
            self.haptics.pulse();
        }

        self.scan_lock = true;

        info!(code_type = ?first.code_type, "Code accepted");
        (self.on_read)(first);

        if self.config.reactivate {
            self.reactivate_timer
                .schedule(self.config.reactivate_timeout, &self.tx);
        }
    }

    /// External `reactivate()` command: release the scan lock unconditionally
    ///
    /// Idempotent; also invalidates a pending auto-reactivation so the lock
    /// taken by the *next* accepted detection is not released early.
    pub(crate) fn handle_reactivate(&mut self) {
        debug!(was_locked = self.scan_lock, "Scan lock released by command");
        self.reactivate_timer.cancel();
        self.scan_lock = false;
    }

    /// Reactivation timer fired: release the scan lock
    pub(crate) fn handle_reactivate_timeout(&mut self, generation: u64) {
        if !self.reactivate_timer.is_current(generation) {
            debug!(generation, "Ignoring stale reactivation timer fire");
            return;
        }
        debug!("Scan lock released by timer");
        self.scan_lock = false;
    }
}
