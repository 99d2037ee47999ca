//! Render geometry for one slide bar frame.
//!
//! Batches become vertical min-max segments joined by connectors. A
//! connector leaves the previous column at whichever extreme occurred last
//! in it and enters the next column at whichever extreme occurred first, so
//! the envelope line does not jump when both extremes share a column.

use crate::progress::ProgressMapper;
use crate::style::WaveformStyle;
use waveslide_audio::Batch;
use waveslide_core::{format_mm_ss, Circle, Color, LineSegment, Vec2};

/// Largest 16-bit span; amplitudes are scaled against it.
const AMPLITUDE_SPAN: f32 = 65_535.0;

/// Height of a tick's anchor line below the time bar.
pub const TICK_ANCHOR_HEIGHT: f32 = 20.0;

/// Baseline of tick labels.
pub const TICK_LABEL_Y: f32 = 50.0;

/// One pixel column of the envelope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeSegment {
    /// Vertical line from the minimum to the maximum amplitude.
    pub column: LineSegment,
    /// Line from the previous column's exit point to this column's entry point.
    pub connector: Option<LineSegment>,
    /// Whether this column lies behind the playback position.
    pub played: bool,
    pub color: Color,
}

/// A labelled time axis tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeTick {
    pub millis: i64,
    pub anchor: LineSegment,
    /// `mm:ss`; renderers center it on `label_anchor.x`.
    pub label: String,
    pub label_anchor: Vec2,
}

/// Progress indicator geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indicator {
    pub line: LineSegment,
    pub handle: Circle,
    pub color: Color,
}

/// Everything to draw for the current state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub segments: Vec<EnvelopeSegment>,
    /// Horizontal line along the top edge, present when ticks are.
    pub time_bar: Option<LineSegment>,
    pub ticks: Vec<TimeTick>,
    pub indicator: Option<Indicator>,
}

/// Maps amplitudes to view Y coordinates around the vertical center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmplitudeScale {
    center_y: f32,
    pixels_per_unit: f32,
}

impl AmplitudeScale {
    pub fn new(height: f32, vertical_padding: f32) -> Self {
        let center_y = height / 2.0;
        Self {
            center_y,
            pixels_per_unit: (center_y - vertical_padding) / AMPLITUDE_SPAN,
        }
    }

    #[inline]
    pub fn y(&self, amplitude: i16) -> f32 {
        self.center_y - f32::from(amplitude) * self.pixels_per_unit
    }
}

/// Horizontal distance between consecutive columns.
///
/// Follows the sample spacing across the drawable band but never drops
/// below one pixel.
pub fn column_spacing(sample_count: usize, width: f32, padding: f32) -> f32 {
    if sample_count < 2 {
        return 1.0;
    }
    ((width - padding * 2.0) / (sample_count - 1) as f32).max(1.0)
}

/// Lay out envelope segments for `batches`.
///
/// `progress_x` is the indicator position; columns at or left of it are
/// marked played when the style shows progress.
pub fn envelope_segments(
    batches: &[Batch],
    sample_count: usize,
    width: f32,
    height: f32,
    style: &WaveformStyle,
    progress_x: f32,
) -> Vec<EnvelopeSegment> {
    let scale = AmplitudeScale::new(height, style.vertical_padding);
    let spacing = column_spacing(sample_count, width, style.horizontal_padding);

    let mut segments = Vec::with_capacity(batches.len());
    let mut previous_exit: Option<Vec2> = None;

    for (i, batch) in batches.iter().enumerate() {
        let x = style.horizontal_padding + i as f32 * spacing;
        let min_y = scale.y(batch.min_amplitude);
        let max_y = scale.y(batch.max_amplitude);
        let first_y = if batch.first_is_min() { min_y } else { max_y };
        let last_y = if batch.last_is_min() { min_y } else { max_y };

        let played = style.show_progress && x <= progress_x;
        segments.push(EnvelopeSegment {
            column: LineSegment::vertical(x, min_y, max_y),
            connector: previous_exit.map(|exit| LineSegment::new(exit, Vec2::new(x, first_y))),
            played,
            color: if played {
                style.waveform_progress_color
            } else {
                style.waveform_color
            },
        });

        previous_exit = Some(Vec2::new(x, last_y));
    }

    segments
}

/// Lay out time axis ticks evenly across the drawable band.
pub fn time_ticks(frames: &[i64], width: f32, padding: f32) -> Vec<TimeTick> {
    let spacing = if frames.len() <= 1 {
        0.0
    } else {
        (width - padding * 2.0) / (frames.len() - 1) as f32
    };

    frames
        .iter()
        .enumerate()
        .map(|(i, &millis)| {
            let x = padding + spacing * i as f32;
            TimeTick {
                millis,
                anchor: LineSegment::vertical(x, 0.0, TICK_ANCHOR_HEIGHT),
                label: format_mm_ss(millis),
                label_anchor: Vec2::new(x, TICK_LABEL_Y),
            }
        })
        .collect()
}

/// Indicator geometry at `x`.
pub fn indicator(mapper: &ProgressMapper, x: f32, color: Color) -> Indicator {
    Indicator {
        line: mapper.indicator_line(x),
        handle: mapper.handle(x),
        color,
    }
}
