//! Playback position to progress percentage.
//!
//! The player is polled on a timer owned by the caller. While playing every
//! poll yields a percentage; once paused a single value is reported so the
//! indicator settles on the final position, then polls stay silent until
//! playback resumes.

use serde::{Deserialize, Serialize};

/// A snapshot of the external player.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlaybackState {
    pub position_ms: i64,
    pub duration_ms: i64,
    pub is_playing: bool,
}

impl PlaybackState {
    /// Position as a percentage of duration, clamped to `[0, 100]`.
    ///
    /// Unknown or zero durations report 0.
    pub fn percentage(&self) -> f64 {
        if self.duration_ms <= 0 {
            return 0.0;
        }
        (self.position_ms as f64 / self.duration_ms as f64 * 100.0).clamp(0.0, 100.0)
    }
}

/// Turns polled player snapshots into progress updates.
#[derive(Debug, Clone, Default)]
pub struct PlaybackTracker {
    reported_while_paused: bool,
}

impl PlaybackTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one poll. Returns the percentage to publish, if any.
    pub fn poll(&mut self, state: PlaybackState) -> Option<f64> {
        if state.is_playing {
            self.reported_while_paused = false;
            return Some(state.percentage());
        }
        if self.reported_while_paused {
            return None;
        }
        self.reported_while_paused = true;
        Some(state.percentage())
    }
}
