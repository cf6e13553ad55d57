// src/view/carousel.rs

//! Carousel cursor and its auto-advance timer.
//!
//! The cursor is a plain index into the backing list, kept inside
//! `[0, len)` by construction: every mutation clamps, and a list-length
//! change resets an out-of-range cursor to 0 before the next tick can read
//! it. The timer is a spawned interval task owned by an [`AutoAdvance`]
//! handle and aborted when the handle drops, so no tick outlives its view.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Current position in an auto-advancing list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    cursor: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { cursor: 0, len }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance to the next item, wrapping. No-op on an empty list.
    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.cursor = (self.cursor + 1) % self.len;
        }
        self.cursor
    }

    /// Step back to the previous item, wrapping. No-op on an empty list.
    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.cursor = (self.cursor + self.len - 1) % self.len;
        }
        self.cursor
    }

    /// Jump directly to an index. Out-of-range requests are rejected.
    pub fn goto(&mut self, index: usize) -> bool {
        if index < self.len {
            self.cursor = index;
            true
        } else {
            false
        }
    }

    /// Timer tick: advance unless the list is empty.
    pub fn tick(&mut self) -> Option<usize> {
        if self.len == 0 {
            None
        } else {
            Some(self.next())
        }
    }

    /// Adopt a new backing-list length.
    ///
    /// An out-of-range cursor resets to 0 (e.g. after a filter change or a
    /// reload shrinks the list while the timer is mid-flight).
    pub fn sync_len(&mut self, len: usize) {
        self.len = len;
        if self.cursor >= len {
            self.cursor = 0;
        }
    }
}

/// Handle to a running auto-advance timer.
///
/// Ticks are delivered over the channel given to [`AutoAdvance::start`].
/// Manual navigation never touches the timer, so the periodicity is
/// unaffected by user interaction; pausing is only ever explicit. Dropping
/// the handle aborts the task.
pub struct AutoAdvance {
    handle: JoinHandle<()>,
    paused: Arc<AtomicBool>,
}

impl AutoAdvance {
    /// Spawn the interval task. The first tick fires one full interval
    /// after start, not immediately.
    pub fn start(interval: Duration, tx: mpsc::Sender<()>) -> Self {
        let paused = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&paused);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // interval's first tick completes immediately; swallow it
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if flag.load(Ordering::Relaxed) {
                    continue;
                }
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        });

        Self { handle, paused }
    }

    pub fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::Relaxed);
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.next(), 1);
        assert_eq!(carousel.next(), 2);
        assert_eq!(carousel.next(), 0);
    }

    #[test]
    fn test_prev_wraps_backwards() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.prev(), 2);
        assert_eq!(carousel.prev(), 1);
    }

    #[test]
    fn test_empty_list_stays_at_zero() {
        let mut carousel = Carousel::new(0);
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.prev(), 0);
        assert_eq!(carousel.tick(), None);
        assert!(!carousel.goto(0));
    }

    #[test]
    fn test_goto_rejects_out_of_range() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.goto(2));
        assert!(!carousel.goto(3));
        assert_eq!(carousel.cursor(), 2);
    }

    #[test]
    fn test_cursor_stays_in_range_under_any_sequence() {
        let mut carousel = Carousel::new(5);
        for step in 0..100 {
            match step % 3 {
                0 => {
                    carousel.next();
                }
                1 => {
                    carousel.prev();
                }
                _ => {
                    carousel.goto(step % 7);
                }
            }
            assert!(carousel.cursor() < carousel.len());
        }
    }

    #[test]
    fn test_shrinking_list_resets_cursor() {
        let mut carousel = Carousel::new(3);
        carousel.goto(2);

        carousel.sync_len(1);
        assert_eq!(carousel.cursor(), 0);

        // Growing keeps the cursor where it was.
        carousel.sync_len(4);
        assert_eq!(carousel.cursor(), 0);
        carousel.goto(3);
        carousel.sync_len(4);
        assert_eq!(carousel.cursor(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_advance_ticks_on_schedule() {
        let (tx, mut rx) = mpsc::channel(4);
        let timer = AutoAdvance::start(Duration::from_millis(5000), tx);

        rx.recv().await.expect("first tick");
        rx.recv().await.expect("second tick");
        drop(timer);
    }

    #[tokio::test(start_paused = true)]
    async fn test_paused_timer_delivers_nothing() {
        let (tx, mut rx) = mpsc::channel(4);
        let timer = AutoAdvance::start(Duration::from_millis(100), tx);
        timer.set_paused(true);
        assert!(timer.is_paused());

        tokio::time::sleep(Duration::from_millis(550)).await;
        assert!(rx.try_recv().is_err());

        timer.set_paused(false);
        rx.recv().await.expect("tick after resume");
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_timer_task() {
        let (tx, mut rx) = mpsc::channel(4);
        let timer = AutoAdvance::start(Duration::from_millis(100), tx);
        drop(timer);

        // The sender lives in the aborted task, so the channel closes.
        assert!(rx.recv().await.is_none());
    }
}
