//! Fixed-rate frame pacing
//!
//! The loop asks [`FramePacer::time_left`] how long it may keep polling input
//! before the next frame is due, then calls [`FramePacer::advance`] once the
//! frame is taken.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FramePacer {
    frame: Duration,
    next_tick: Instant,
}

impl FramePacer {
    /// Pacer for `fps` frames per second, first frame due one period after `now`.
    /// An `fps` of 0 is treated as 1.
    pub fn new(fps: u32, now: Instant) -> Self {
        let frame = Duration::from_secs(1) / fps.max(1);
        Self {
            frame,
            next_tick: now + frame,
        }
    }

    /// Time remaining until the next frame is due; zero once it is due.
    pub fn time_left(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }

    /// Move to the next tick boundary.
    ///
    /// If the loop fell more than a whole frame behind, the schedule restarts
    /// from `now` instead of bursting to catch up.
    pub fn advance(&mut self, now: Instant) {
        self.next_tick += self.frame;
        if self.next_tick + self.frame < now {
            self.next_tick = now + self.frame;
        }
    }
}
