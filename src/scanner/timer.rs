// SPDX-License-Identifier: GPL-3.0-only

//! Single-slot cancellable one-shot timers
//!
//! Each timer kind owns exactly one slot. Scheduling cancels any pending
//! schedule of the same kind first, and dropping the slot cancels whatever
//! is outstanding, so a fire can never reach a torn-down scanner.
//!
//! Cancellation is two-layered: the sleeping task is aborted, and the slot's
//! generation counter is bumped so that a fire already sitting in the message
//! queue is recognized as stale and ignored by the dispatcher.

use crate::scanner::state::Message;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

/// The two timer kinds the scanner schedules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Releases the scan lock after an accepted detection
    Reactivate,
    /// Deactivates the camera after the configured idle timeout
    IdleDeactivate,
}

/// A single outstanding one-shot timer of a fixed kind
pub(crate) struct TimerSlot {
    kind: TimerKind,
    generation: u64,
    task: Option<JoinHandle<()>>,
}

impl TimerSlot {
    pub(crate) fn new(kind: TimerKind) -> Self {
        Self {
            kind,
            generation: 0,
            task: None,
        }
    }

    /// Arm the timer, cancelling any previous schedule of this kind
    ///
    /// When the delay elapses a [`Message::TimerFired`] carrying the current
    /// generation is posted through `tx`; if every handle is gone by then the
    /// upgrade fails and the fire evaporates.
    pub(crate) fn schedule(&mut self, delay: Duration, tx: &mpsc::WeakUnboundedSender<Message>) {
        self.cancel();

        let kind = self.kind;
        let generation = self.generation;
        let tx = tx.clone();
        trace!(?kind, generation, delay_ms = delay.as_millis() as u64, "Timer armed");

        self.task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(tx) = tx.upgrade() {
                let _ = tx.send(Message::TimerFired { kind, generation });
            }
        }));
    }

    /// Cancel the pending schedule, if any
    ///
    /// Also invalidates a fire that already left the timer task but has not
    /// been dispatched yet.
    pub(crate) fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if let Some(task) = self.task.take() {
            task.abort();
            trace!(kind = ?self.kind, "Timer cancelled");
        }
    }

    /// Whether a fire with this generation belongs to the current schedule
    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

impl Drop for TimerSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_timer_fires_with_current_generation() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let weak = tx.downgrade();

        let mut slot = TimerSlot::new(TimerKind::Reactivate);
        slot.schedule(Duration::from_millis(50), &weak);

        let Some(Message::TimerFired { kind, generation }) = rx.recv().await else {
            panic!("expected a timer fire");
        };
        assert_eq!(kind, TimerKind::Reactivate);
        assert!(slot.is_current(generation));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_invalidates_previous_fire() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let weak = tx.downgrade();

        let mut slot = TimerSlot::new(TimerKind::IdleDeactivate);
        slot.schedule(Duration::from_millis(50), &weak);
        slot.schedule(Duration::from_millis(50), &weak);

        let Some(Message::TimerFired { generation, .. }) = rx.recv().await else {
            panic!("expected a timer fire");
        };
        assert!(slot.is_current(generation));

        // The first schedule was aborted; only one fire arrives in total
        drop(tx);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_fire() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let weak = tx.downgrade();

        let mut slot = TimerSlot::new(TimerKind::Reactivate);
        slot.schedule(Duration::from_millis(50), &weak);
        slot.cancel();
        drop(tx);

        // Channel closes without the aborted timer ever sending
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_handles_let_fire_evaporate() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let weak = tx.downgrade();

        let mut slot = TimerSlot::new(TimerKind::Reactivate);
        slot.schedule(Duration::from_millis(50), &weak);
        drop(tx);

        assert!(rx.recv().await.is_none());
    }
}
