// src/view/visibility.rs

//! Visibility gate for entrance reveals and play/pause triggers.
//!
//! A gate watches a stream of visibility ratios (fraction of a section on
//! screen) against a threshold. Policy is chosen per use site:
//!
//! - [`GatePolicy::Latch`]: one-way false→true on the first qualifying
//!   crossing, for entrance reveals that must not replay.
//! - [`GatePolicy::Toggle`]: follows every crossing in both directions, for
//!   play/pause-style triggers.
//!
//! The subscription driving a gate is an owned task handle, aborted on
//! drop, so no observation callback fires after the owning view is gone.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Transition policy for a visibility gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePolicy {
    Latch,
    Toggle,
}

/// Threshold-crossing state machine.
#[derive(Debug, Clone)]
pub struct VisibilityGate {
    threshold: f32,
    policy: GatePolicy,
    visible: bool,
}

impl VisibilityGate {
    /// A gate starts hidden; nothing fires until the first observation.
    pub fn new(threshold: f32, policy: GatePolicy) -> Self {
        Self {
            threshold,
            policy,
            visible: false,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Feed one visibility ratio. Returns the new flag value when the
    /// observation caused a transition, `None` otherwise.
    pub fn observe(&mut self, ratio: f32) -> Option<bool> {
        let crossed = ratio >= self.threshold;
        match self.policy {
            GatePolicy::Latch => {
                if crossed && !self.visible {
                    self.visible = true;
                    Some(true)
                } else {
                    None
                }
            }
            GatePolicy::Toggle => {
                if crossed != self.visible {
                    self.visible = crossed;
                    Some(crossed)
                } else {
                    None
                }
            }
        }
    }
}

/// Running observation of a ratio stream through a gate.
///
/// Transitions are forwarded over `events`; dropping the subscription
/// aborts the task and ends delivery.
pub struct VisibilitySubscription {
    handle: JoinHandle<()>,
}

impl VisibilitySubscription {
    /// Attach a gate to a ratio source.
    pub fn attach(
        mut gate: VisibilityGate,
        mut ratios: watch::Receiver<f32>,
        events: mpsc::Sender<bool>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            while ratios.changed().await.is_ok() {
                let ratio = *ratios.borrow_and_update();
                if let Some(flag) = gate.observe(ratio) {
                    if events.send(flag).await.is_err() {
                        break;
                    }
                }
            }
        });
        Self { handle }
    }
}

impl Drop for VisibilitySubscription {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_is_one_way() {
        let mut gate = VisibilityGate::new(0.3, GatePolicy::Latch);
        assert_eq!(gate.observe(0.1), None);
        assert_eq!(gate.observe(0.5), Some(true));
        // Leaving the viewport does not reset an entrance reveal.
        assert_eq!(gate.observe(0.0), None);
        assert!(gate.visible());
        assert_eq!(gate.observe(0.9), None);
    }

    #[test]
    fn test_toggle_follows_crossings() {
        let mut gate = VisibilityGate::new(0.3, GatePolicy::Toggle);
        assert_eq!(gate.observe(0.5), Some(true));
        assert_eq!(gate.observe(0.6), None);
        assert_eq!(gate.observe(0.1), Some(false));
        assert_eq!(gate.observe(0.4), Some(true));
    }

    #[test]
    fn test_threshold_boundary_counts_as_visible() {
        let mut gate = VisibilityGate::new(0.3, GatePolicy::Toggle);
        assert_eq!(gate.observe(0.3), Some(true));
    }

    #[tokio::test]
    async fn test_subscription_forwards_transitions() {
        let (ratio_tx, ratio_rx) = watch::channel(0.0f32);
        let (event_tx, mut event_rx) = mpsc::channel(4);
        let gate = VisibilityGate::new(0.3, GatePolicy::Latch);
        let sub = VisibilitySubscription::attach(gate, ratio_rx, event_tx);

        ratio_tx.send(0.1).unwrap();
        ratio_tx.send(0.8).unwrap();
        assert_eq!(event_rx.recv().await, Some(true));

        drop(sub);
        // After teardown the channel closes and nothing more arrives.
        assert_eq!(event_rx.recv().await, None);
    }
}
