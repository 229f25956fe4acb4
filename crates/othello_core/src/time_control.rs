//! Time control and search limits for Othello engines.
//!
//! The caller hands a player the time left on its clock for the whole game.
//! [`TimeBudget`] turns that into a per-move slice, and [`SearchLimits`] /
//! [`TimeControl`] carry the slice into the search.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Search limits that control when an engine should stop searching.
///
/// Engines stop at whichever of the depth and the time limit comes first.
/// When the clock runs out an iterative search returns the deepest result it
/// fully completed.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum search depth in plies
    pub depth: u8,
    /// Maximum time allowed for this move (None = infinite)
    pub move_time: Option<Duration>,
    /// Time controller for checking if search should stop
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// Create limits with only depth constraint (no time limit).
    pub fn depth(depth: u8) -> Self {
        Self::with_move_time(depth, None)
    }

    /// Create limits with both depth and time constraints.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self::with_move_time(depth, Some(move_time))
    }

    pub fn with_move_time(depth: u8, move_time: Option<Duration>) -> Self {
        Self {
            depth,
            move_time,
            time_control: TimeControl::new(move_time),
        }
    }

    /// Start the time control clock. Call this when search begins.
    pub fn start(&self) {
        self.time_control.start();
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(3)
    }
}

/// Thread-safe time controller that tracks whether search should stop.
///
/// Cheap to clone; clones share the stop flag and the start time, so a
/// parallel search can poll the same clock from every worker.
#[derive(Debug, Clone)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    start_time: Arc<Mutex<Option<Instant>>>,
    time_limit: Option<Duration>,
    /// How often to check the clock (in nodes).
    check_interval: u64,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            start_time: Arc::new(Mutex::new(None)),
            time_limit,
            check_interval: 256,
        }
    }

    /// Start the clock and clear any earlier stop.
    pub fn start(&self) {
        *self.start_time.lock().unwrap_or_else(PoisonError::into_inner) = Some(Instant::now());
        self.stopped.store(false, Ordering::SeqCst);
    }

    /// Force stop the search immediately.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Check the clock and raise the stop flag if the limit has passed.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }

        if let Some(limit) = self.time_limit {
            if self.elapsed() >= limit {
                self.stop();
                return true;
            }
        }

        false
    }

    /// True every `check_interval` nodes.
    #[inline]
    pub fn should_check_time(&self, nodes: u64) -> bool {
        nodes % self.check_interval == 0
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Get remaining time (None if no limit).
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.time_limit?;
        Some(limit.saturating_sub(self.elapsed()))
    }

    /// Whether work expected to take `estimate` still fits in the limit.
    pub fn has_time_for(&self, estimate: Duration) -> bool {
        if self.is_stopped() {
            return false;
        }
        match self.remaining() {
            Some(left) => estimate < left,
            None => true,
        }
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Time left on a player's clock for the rest of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBudget {
    remaining: Option<Duration>,
}

impl TimeBudget {
    pub const UNLIMITED: TimeBudget = TimeBudget { remaining: None };

    /// Reads the caller's `ms_left`; any negative value means no limit.
    pub fn from_ms_left(ms_left: i64) -> Self {
        if ms_left < 0 {
            Self::UNLIMITED
        } else {
            TimeBudget {
                remaining: Some(Duration::from_millis(ms_left as u64)),
            }
        }
    }

    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    pub fn is_unlimited(&self) -> bool {
        self.remaining.is_none()
    }

    /// Time this move may use: the clock spread over the moves this side
    /// still expects to make (`empties / 2 + 1`), scaled by `safety`.
    pub fn move_slice(&self, empties: u32, safety: f64) -> Option<Duration> {
        let remaining = self.remaining?;
        let moves_left = empties / 2 + 1;
        let safety = safety.clamp(0.0, 1.0);
        Some(remaining.mul_f64(safety) / moves_left)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
