// SPDX-License-Identifier: GPL-3.0-only

//! The scanner component
//!
//! A scanner is spawned once per mounted camera region. All state lives in a
//! [`state::ScannerModel`] owned by a single event-loop task; the host talks
//! to it through a cloneable [`ScannerHandle`] and observes the rendering
//! contract through a `watch` channel of [`Viewport`] values.
//!
//! Teardown is implicit: dropping every handle closes the message channel,
//! the loop exits, and the model's timer slots abort their pending tasks on
//! drop, so no timer can fire against a destroyed scanner.

pub(crate) mod handlers;
pub(crate) mod state;
pub(crate) mod timer;
pub(crate) mod view;

pub use state::{FadeTransition, Message, OnRead, PermissionState};
pub use timer::TimerKind;
pub use view::Viewport;

use crate::backends::camera::{CameraBackend, CodeDescriptor};
use crate::backends::haptics::Haptics;
use crate::backends::permission::{PermissionProvider, PermissionStatus};
use crate::config::ScannerConfig;
use crate::constants;
use state::ScannerModel;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

impl ScannerModel {
    /// Single-threaded message dispatcher
    pub(crate) fn update(&mut self, message: Message) {
        match message {
            Message::PermissionResolved(status) => self.handle_permission_resolved(status),
            Message::CodesDetected(codes) => self.handle_codes_detected(codes),
            Message::SetCamera(active) => self.handle_set_camera(active),
            Message::Reactivate => self.handle_reactivate(),
            Message::TimerFired {
                kind: TimerKind::Reactivate,
                generation,
            } => self.handle_reactivate_timeout(generation),
            Message::TimerFired {
                kind: TimerKind::IdleDeactivate,
                generation,
            } => self.handle_idle_timeout(generation),
        }
    }
}

/// The scanner component
///
/// Not held directly; [`Scanner::spawn`] starts the event loop and returns
/// the handle that controls it.
pub struct Scanner;

impl Scanner {
    /// Spawn a scanner and return its imperative handle
    ///
    /// Fires the permission request immediately and, if fade-in is enabled,
    /// starts the mount-time fade concurrently with it. Must be called from
    /// within a tokio runtime.
    pub fn spawn(
        config: ScannerConfig,
        permission: &dyn PermissionProvider,
        camera: &dyn CameraBackend,
        haptics: Box<dyn Haptics>,
        on_read: OnRead,
    ) -> ScannerHandle {
        let (tx, mut rx) = mpsc::unbounded_channel();

        // No matching device is a permanent precondition: the viewport stays
        // hidden for the scanner's whole lifetime
        let device = camera.device_for(config.camera_type);
        if device.is_none() {
            warn!(facing = %config.camera_type, "No camera device for requested facing");
        }

        let mut model = ScannerModel::new(
            config.clone(),
            device,
            haptics,
            on_read,
            tx.downgrade(),
        );

        // Mount-time fade starts alongside the permission check and runs
        // independently of its outcome
        if config.fade_in {
            model.fade = Some(state::FadeTransition::start(
                constants::FADE_MOUNT_DELAY,
                config.fade_duration,
            ));
        }

        model.permission = PermissionState::Checking;
        let request = permission.request(config.prompt.clone());
        let permission_tx = tx.downgrade();
        tokio::spawn(async move {
            let status = match request.await {
                Ok(status) => status,
                Err(err) => {
                    warn!(error = %err, "Permission request failed, treating as denied");
                    PermissionStatus::Denied
                }
            };
            if let Some(tx) = permission_tx.upgrade() {
                let _ = tx.send(Message::PermissionResolved(status));
            }
        });

        let (view_tx, view_rx) = watch::channel(model.viewport());

        tokio::spawn(async move {
            info!("Scanner started");
            while let Some(message) = rx.recv().await {
                model.update(message);
                // send_replace never fails; the handle may have dropped its
                // receiver while keeping the sender side alive
                view_tx.send_replace(model.viewport());
            }
            debug!("Scanner torn down");
        });

        ScannerHandle { tx, viewport: view_rx }
    }
}

/// Imperative handle over a spawned scanner
///
/// Cloneable; the scanner tears down when the last clone is dropped. All
/// methods are fire-and-forget sends into the dispatcher and are safe to
/// call at any time, including after teardown has begun.
#[derive(Clone)]
pub struct ScannerHandle {
    tx: mpsc::UnboundedSender<Message>,
    viewport: watch::Receiver<Viewport>,
}

impl ScannerHandle {
    /// Clear the scan lock unconditionally
    ///
    /// No-op when already unlocked.
    pub fn reactivate(&self) {
        let _ = self.tx.send(Message::Reactivate);
    }

    /// Activate (`true`, tap-to-activate) or deactivate (`false`, manual
    /// pause) the camera
    pub fn set_camera(&self, active: bool) {
        let _ = self.tx.send(Message::SetCamera(active));
    }

    /// Feed a detection batch from the decoder
    ///
    /// Batches are dropped silently while locked, while the camera is
    /// inactive, or when empty.
    pub fn codes_detected(&self, codes: Vec<CodeDescriptor>) {
        let _ = self.tx.send(Message::CodesDetected(codes));
    }

    /// Current rendering contract for the camera region
    pub fn viewport(&self) -> Viewport {
        self.viewport.borrow().clone()
    }

    /// Subscribe to viewport changes
    ///
    /// The receiver yields a change notification after every processed
    /// message; hosts typically re-render on each one.
    pub fn subscribe(&self) -> watch::Receiver<Viewport> {
        self.viewport.clone()
    }
}
