//! Mapping between playback progress and slide bar pixels.
//!
//! Progress is a percentage in `[0, 100]`. The drawable band runs from
//! `padding` to `width - padding`; the indicator handle sits on the bottom
//! edge of the view.

use serde::{Deserialize, Serialize};
use waveslide_core::{Circle, LineSegment, Vec2};

/// Clamp a progress percentage to `[0, 100]`. NaN becomes 0.
#[inline]
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 100.0)
}

/// Hit test for the indicator.
///
/// A touch counts when it is inside the handle circle or anywhere within the
/// handle's horizontal extent, at any height. The vertical band makes the
/// thin indicator line easy to grab.
pub fn hit_test(touch: Vec2, handle: Circle) -> bool {
    handle.contains(touch) || handle.spans_x(touch.x)
}

/// When a drag reports progress to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyMode {
    /// Once, when the pointer is released.
    #[default]
    OnRelease,
    /// On every move and again on release.
    Continuous,
}

/// View geometry needed to map progress to pixels and back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressMapper {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub handle_radius: f32,
}

impl ProgressMapper {
    pub fn new(width: f32, height: f32, padding: f32, handle_radius: f32) -> Self {
        Self {
            width,
            height,
            padding,
            handle_radius,
        }
    }

    /// Width of the drawable band.
    #[inline]
    pub fn drawable_width(&self) -> f32 {
        self.width - self.padding * 2.0
    }

    /// X coordinate for a progress percentage (clamped first).
    pub fn percentage_to_x(&self, progress: f64) -> f32 {
        let fraction = clamp_progress(progress) / 100.0;
        self.padding + (fraction * f64::from(self.drawable_width())) as f32
    }

    /// Progress percentage for an X coordinate, clamped to `[0, 100]`.
    ///
    /// A collapsed drawable band maps everything to 0.
    pub fn x_to_percentage(&self, x: f32) -> f64 {
        let drawable = f64::from(self.drawable_width());
        if drawable <= 0.0 {
            return 0.0;
        }
        clamp_progress(f64::from(x - self.padding) / drawable * 100.0)
    }

    /// Clamp an X coordinate into the drawable band.
    pub fn clamp_x(&self, x: f32) -> f32 {
        x.min(self.width - self.padding).max(self.padding)
    }

    /// Handle circle for an indicator at `x`.
    pub fn handle(&self, x: f32) -> Circle {
        Circle::new(
            Vec2::new(x, self.height - self.handle_radius),
            self.handle_radius,
        )
    }

    /// Indicator line from the top of the view down to the handle center.
    pub fn indicator_line(&self, x: f32) -> LineSegment {
        LineSegment::new(Vec2::new(x, 0.0), self.handle(x).center)
    }

    /// Whether `touch` grabs an indicator drawn at `x`.
    pub fn hits_indicator(&self, touch: Vec2, x: f32) -> bool {
        hit_test(touch, self.handle(x))
    }
}

/// Pointer drag on the progress indicator.
#[derive(Debug, Clone, Default)]
pub struct DragGesture {
    mode: NotifyMode,
    touch_x: Option<f32>,
}

impl DragGesture {
    pub fn new(mode: NotifyMode) -> Self {
        Self {
            mode,
            touch_x: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.touch_x.is_some()
    }

    /// Switch how the drag is reported; an in-flight drag keeps its position.
    pub fn set_mode(&mut self, mode: NotifyMode) {
        self.mode = mode;
    }

    /// Where the indicator is being dragged, overriding the stored progress.
    pub fn dragged_x(&self) -> Option<f32> {
        self.touch_x
    }

    /// Start a drag if `touch` hits the indicator at `indicator_x`.
    pub fn press(&mut self, mapper: &ProgressMapper, indicator_x: f32, touch: Vec2) -> bool {
        if !mapper.hits_indicator(touch, indicator_x) {
            return false;
        }
        self.touch_x = Some(mapper.clamp_x(touch.x));
        true
    }

    /// Follow the pointer.
    ///
    /// Returns the progress to report in continuous mode.
    pub fn move_to(&mut self, mapper: &ProgressMapper, x: f32) -> Option<f64> {
        if !self.is_dragging() {
            return None;
        }
        let x = mapper.clamp_x(x);
        self.touch_x = Some(x);
        match self.mode {
            NotifyMode::Continuous => Some(mapper.x_to_percentage(x)),
            NotifyMode::OnRelease => None,
        }
    }

    /// End the drag and return the progress it settled on.
    pub fn release(&mut self, mapper: &ProgressMapper) -> Option<f64> {
        self.touch_x.take().map(|x| mapper.x_to_percentage(x))
    }

    /// Drop an in-flight drag without reporting it.
    pub fn cancel(&mut self) {
        self.touch_x = None;
    }
}
