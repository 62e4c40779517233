//! Frame timing. The simulation consumes elapsed seconds from a
//! `FrameClock` and never reads wall-clock time directly, so tests and
//! headless drivers can script time.

use std::collections::VecDeque;
use std::time::Instant;

/// Frames longer than this are treated as anomalous (tab suspension,
/// debugger pause) and skipped rather than simulated.
pub const MAX_FRAME_DELTA_SECONDS: f32 = 0.5;

/// Validates a raw frame delta. Returns `None` for negative,
/// non-finite, or overlong deltas; callers skip those frames.
pub fn usable_frame_delta(delta_seconds: f32) -> Option<f32> {
    if !delta_seconds.is_finite()
        || delta_seconds < 0.0
        || delta_seconds > MAX_FRAME_DELTA_SECONDS
    {
        return None;
    }
    Some(delta_seconds)
}

pub trait FrameClock {
    /// Seconds elapsed since the previous call.
    fn delta_seconds(&mut self) -> f32;
}

/// Monotonic wall-clock frames.
#[derive(Debug)]
pub struct SystemClock {
    last: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn delta_seconds(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        delta
    }
}

/// Scripted frames for tests and deterministic replays. Yields queued
/// deltas in order, then zero.
#[derive(Debug, Default)]
pub struct ManualClock {
    queued: VecDeque<f32>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(&mut self, delta_seconds: f32) {
        self.queued.push_back(delta_seconds);
    }
}

impl FrameClock for ManualClock {
    fn delta_seconds(&mut self) -> f32 {
        self.queued.pop_front().unwrap_or(0.0)
    }
}
