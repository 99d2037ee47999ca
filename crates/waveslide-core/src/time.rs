//! Time axis planning for the waveform slide bar.
//!
//! Durations are plain milliseconds (`i64`), matching what external players
//! report. Interior ticks are never closer than one second apart.

use crate::error::{Result, WaveformError};
use crate::MILLIS_PER_SECOND;
use smallvec::SmallVec;

/// Ordered tick timestamps in milliseconds.
///
/// Axis plans are short (a handful of labels), so they live inline.
pub type TimeFrames = SmallVec<[i64; 8]>;

/// Split `duration_ms` into at most `count` evenly spaced ticks.
///
/// The first tick is always `0`. Interior ticks are spaced by
/// `duration_ms / (count - 1)` and only emitted while that step is at least
/// one second, so short durations yield fewer ticks than requested. The full
/// duration is appended as the final tick once it reaches one second.
///
/// Stepping accumulates in `f64` and each tick is floored, so the last
/// interior tick can land within a millisecond of the final duration tick.
pub fn plan_time_frames(duration_ms: i64, count: i32) -> Result<TimeFrames> {
    if duration_ms < 0 {
        return Err(WaveformError::InvalidArgument(format!(
            "duration must not be negative, got {duration_ms}"
        )));
    }
    if count < 1 {
        return Err(WaveformError::InvalidArgument(format!(
            "tick count must be at least 1, got {count}"
        )));
    }

    let mut frames = TimeFrames::new();
    frames.push(0);

    // A single tick has no step to speak of.
    if count > 1 {
        let duration = duration_ms as f64;
        let step = duration / f64::from(count - 1);
        let mut current = step;
        while current < duration && step >= MILLIS_PER_SECOND as f64 {
            frames.push(current.floor() as i64);
            current += step;
        }
    }

    if duration_ms >= MILLIS_PER_SECOND {
        frames.push(duration_ms);
    }

    Ok(frames)
}

/// Format a timestamp as `mm:ss`.
///
/// Minutes are total minutes and are not wrapped at the hour, so one hour
/// renders as `60:00`. Negative input renders as `00:00`.
pub fn format_mm_ss(ms: i64) -> String {
    let total_seconds = ms.max(0) / MILLIS_PER_SECOND;
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}
