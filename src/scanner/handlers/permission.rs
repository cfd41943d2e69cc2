// SPDX-License-Identifier: GPL-3.0-only

//! Permission gate handlers

use crate::backends::permission::PermissionStatus;
use crate::scanner::state::ScannerModel;
use tracing::info;

impl ScannerModel {
    /// Permission request completed
    ///
    /// Provider failures were already mapped to `Denied` on the request
    /// task; here the outcome only needs recording. Authorization while the
    /// camera is active arms the idle timer, since the camera surface mounts
    /// at this moment.
    pub(crate) fn handle_permission_resolved(&mut self, status: PermissionStatus) {
        self.permission = status.into();
        info!(?status, "Camera permission resolved");

        if self.permission.is_authorized()
            && self.camera_active
            && self.config.idle_timeout_enabled()
        {
            self.idle_timer.schedule(self.config.camera_timeout, &self.tx);
        }
    }
}
