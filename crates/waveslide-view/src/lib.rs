//! Waveslide View - slide bar model without a toolkit
//!
//! Everything a renderer needs to draw the waveform slide bar, and everything
//! an input layer needs to seek with it. Nothing here paints; the output is
//! plain geometry.
//!
//! - `style`: colors, paddings and flags, loadable from JSON
//! - `progress`: percentage <-> pixel mapping, indicator hit test, drag gesture
//! - `listener`: progress change callbacks and channels
//! - `layout`: envelope segments, time ticks and indicator geometry
//! - `slide_bar`: the stateful model tying it together

pub mod layout;
pub mod listener;
pub mod progress;
pub mod slide_bar;
pub mod style;

pub use layout::{EnvelopeSegment, Frame, Indicator, TimeTick};
pub use listener::{ChannelListener, ProgressListener, SharedProgress};
pub use progress::{DragGesture, NotifyMode, ProgressMapper};
pub use slide_bar::WaveformSlideBar;
pub use style::WaveformStyle;

/// Tick count requested for the time axis when none is given.
pub const DEFAULT_TICK_COUNT: i32 = 5;
