//! Waveslide Core - Foundation types for the waveform slide bar
//!
//! This crate provides the types shared by the audio and view crates:
//! - Error handling (`WaveformError`, `Result`)
//! - Time axis planning and `mm:ss` labels
//! - Colors for the style configuration
//! - Geometric primitives emitted to renderers

pub mod color;
pub mod error;
pub mod geometry;
pub mod time;

pub use color::Color;
pub use error::{Result, WaveformError};
pub use geometry::{Circle, LineSegment, Vec2};
pub use time::{format_mm_ss, plan_time_frames, TimeFrames};

/// Milliseconds in one second, the minimum spacing between interior ticks.
pub const MILLIS_PER_SECOND: i64 = 1000;
