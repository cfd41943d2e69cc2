// SPDX-License-Identifier: GPL-3.0-only

//! Scanner state management

use crate::backends::camera::{CameraDevice, CodeDescriptor};
use crate::backends::haptics::Haptics;
use crate::backends::permission::PermissionStatus;
use crate::config::ScannerConfig;
use crate::scanner::timer::{TimerKind, TimerSlot};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Callback invoked once per accepted detection
pub type OnRead = Box<dyn FnMut(CodeDescriptor) + Send>;

/// Camera-use permission state machine
///
/// Set once per scanner lifetime by the permission gate; read-only to the
/// rest of the component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionState {
    /// No request issued yet
    #[default]
    Unchecked,
    /// Request in flight
    Checking,
    /// Camera use granted
    Authorized,
    /// Camera use refused (or the provider failed)
    Denied,
}

impl PermissionState {
    /// Whether the permission check has completed, regardless of outcome
    ///
    /// Distinguishes "still pending" from "denied" for rendering.
    pub fn is_checked(&self) -> bool {
        matches!(self, PermissionState::Authorized | PermissionState::Denied)
    }

    /// Whether camera use is granted
    pub fn is_authorized(&self) -> bool {
        matches!(self, PermissionState::Authorized)
    }
}

impl From<PermissionStatus> for PermissionState {
    fn from(status: PermissionStatus) -> Self {
        match status {
            PermissionStatus::Authorized => PermissionState::Authorized,
            PermissionStatus::Denied => PermissionState::Denied,
        }
    }
}

/// Fade-in opacity transition
///
/// A value, not a scheduled callback: opacity is derived from the stored
/// start instant whenever the host asks, so replacing the transition on an
/// activation toggle atomically discards any previous fade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeTransition {
    started_at: Instant,
    delay: Duration,
    duration: Duration,
}

impl FadeTransition {
    /// Start a transition now: hold opacity at 0 for `delay`, then animate
    /// to 1 over `duration`
    pub fn start(delay: Duration, duration: Duration) -> Self {
        Self {
            started_at: Instant::now(),
            delay,
            duration,
        }
    }

    /// Current opacity in [0, 1]
    pub fn opacity(&self) -> f32 {
        self.opacity_at(Instant::now())
    }

    /// Opacity in [0, 1] at the given instant
    pub fn opacity_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        let Some(animated) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() || animated >= self.duration {
            return 1.0;
        }
        ease_in_out_quad(animated.as_secs_f32() / self.duration.as_secs_f32())
    }

    /// Whether the transition has reached full opacity
    pub fn is_complete(&self) -> bool {
        self.opacity() >= 1.0
    }
}

/// Quadratic ease-in-out curve over t in [0, 1]
fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Messages driving the scanner's single-threaded dispatcher
#[derive(Debug)]
pub enum Message {
    /// Permission request completed (provider failures arrive as `Denied`)
    PermissionResolved(PermissionStatus),
    /// The decoder reported a batch of decoded codes for one frame
    CodesDetected(Vec<CodeDescriptor>),
    /// Activate (tap-to-activate) or deactivate (manual pause) the camera
    SetCamera(bool),
    /// Clear the scan lock unconditionally
    Reactivate,
    /// A one-shot timer fired
    ///
    /// `generation` identifies the schedule that armed the timer; fires from
    /// a cancelled schedule are ignored.
    TimerFired { kind: TimerKind, generation: u64 },
}

/// The scanner model stores all component state and is mutated only by the
/// message dispatcher on its owning task.
pub(crate) struct ScannerModel {
    /// Scanner configuration, fixed at spawn
    pub(crate) config: ScannerConfig,
    /// Camera-use permission state
    pub(crate) permission: PermissionState,
    /// Whether the camera sensor is active (initially true)
    pub(crate) camera_active: bool,
    /// Debounce flag: true while further detections are suppressed
    pub(crate) scan_lock: bool,
    /// Fade-in transition for the camera surface, if one is running
    pub(crate) fade: Option<FadeTransition>,
    /// Device matching the requested facing, if the backend has one
    pub(crate) device: Option<CameraDevice>,
    /// Single-slot timer releasing the scan lock
    pub(crate) reactivate_timer: TimerSlot,
    /// Single-slot timer deactivating an idle camera
    pub(crate) idle_timer: TimerSlot,
    /// Haptic feedback sink
    pub(crate) haptics: Box<dyn Haptics>,
    /// Host callback for accepted detections
    pub(crate) on_read: OnRead,
    /// Weak handle back into the dispatcher, used by timer tasks
    ///
    /// Weak so that outstanding timers never keep the event loop alive
    /// after every `ScannerHandle` is gone.
    pub(crate) tx: mpsc::WeakUnboundedSender<Message>,
}

impl ScannerModel {
    pub(crate) fn new(
        config: ScannerConfig,
        device: Option<CameraDevice>,
        haptics: Box<dyn Haptics>,
        on_read: OnRead,
        tx: mpsc::WeakUnboundedSender<Message>,
    ) -> Self {
        Self {
            config,
            permission: PermissionState::Unchecked,
            camera_active: true,
            scan_lock: false,
            fade: None,
            device,
            reactivate_timer: TimerSlot::new(TimerKind::Reactivate),
            idle_timer: TimerSlot::new(TimerKind::IdleDeactivate),
            haptics,
            on_read,
            tx,
        }
    }
}
