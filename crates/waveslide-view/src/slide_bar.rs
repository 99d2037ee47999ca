//! Stateful waveform slide bar.
//!
//! Owns the loaded samples, their batches for the current size, the time
//! axis and the playback progress. Nothing is drawn here; [`WaveformSlideBar::frame`]
//! hands the geometry to whatever renders it.

use crate::layout::{self, Frame};
use crate::listener::{ProgressListener, SharedProgress};
use crate::progress::{DragGesture, ProgressMapper};
use crate::style::WaveformStyle;
use tracing::{debug, info};
use waveslide_audio::{decode, Batch, Envelope};
use waveslide_core::{plan_time_frames, LineSegment, Result, TimeFrames, Vec2};

/// Waveform slide bar model.
pub struct WaveformSlideBar {
    style: WaveformStyle,
    width: f32,
    height: f32,
    envelope: Option<Envelope>,
    time_frames: Option<TimeFrames>,
    progress: SharedProgress,
    drag: DragGesture,
    listener: Option<Box<dyn ProgressListener>>,
}

impl WaveformSlideBar {
    /// Create an unmeasured, empty slide bar.
    pub fn new(style: WaveformStyle) -> Self {
        let drag = DragGesture::new(style.notify_mode);
        Self {
            style,
            width: 0.0,
            height: 0.0,
            envelope: None,
            time_frames: None,
            progress: SharedProgress::default(),
            drag,
            listener: None,
        }
    }

    pub fn style(&self) -> &WaveformStyle {
        &self.style
    }

    /// Replace the style; batches are rebuilt if the padding changed the band.
    ///
    /// A drag in progress survives and is reported under the new notify mode.
    pub fn set_style(&mut self, style: WaveformStyle) {
        self.drag.set_mode(style.notify_mode);
        self.style = style;
        self.rebatch();
    }

    /// Register the listener notified when the user seeks.
    pub fn set_listener<L>(&mut self, listener: L)
    where
        L: ProgressListener + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Load decoded samples; progress restarts at 0.
    pub fn set_data(&mut self, samples: Vec<i16>) {
        info!(samples = samples.len(), "Loading waveform data");
        self.envelope = Some(Envelope::new(samples));
        self.progress.set(0.0);
        self.drag.cancel();
        self.rebatch();
    }

    /// Decode PCM16 mono bytes and load them.
    pub fn set_pcm_bytes(&mut self, bytes: &[u8]) {
        self.set_data(decode(bytes));
    }

    /// Drop the loaded source.
    pub fn clear_data(&mut self) {
        self.envelope = None;
        self.drag.cancel();
    }

    pub fn has_data(&self) -> bool {
        self.envelope.is_some()
    }

    /// Set precomputed time axis ticks in milliseconds.
    pub fn set_time_frames(&mut self, frames: TimeFrames) {
        self.time_frames = Some(frames);
    }

    /// Plan the time axis for a duration.
    pub fn set_duration(&mut self, duration_ms: i64, tick_count: i32) -> Result<()> {
        let frames = plan_time_frames(duration_ms, tick_count)?;
        debug!(duration_ms, ticks = frames.len(), "Planned time axis");
        self.time_frames = Some(frames);
        Ok(())
    }

    pub fn time_frames(&self) -> Option<&[i64]> {
        self.time_frames.as_deref()
    }

    /// Update the view size; batches follow the new width.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.rebatch();
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Pixel columns available to the envelope.
    pub fn columns(&self) -> f32 {
        self.width - self.style.horizontal_padding * 2.0
    }

    fn rebatch(&mut self) {
        let columns = self.columns();
        if let Some(envelope) = self.envelope.as_mut() {
            envelope.ensure(columns);
        }
    }

    /// Batches for the current width, if data is loaded.
    pub fn batches(&self) -> Option<&[Batch]> {
        self.envelope.as_ref().map(Envelope::batches)
    }

    pub fn progress(&self) -> f64 {
        self.progress.get()
    }

    /// Set progress from playback. Values are clamped; listeners are not
    /// notified, since the change did not come from the user.
    pub fn set_progress(&mut self, progress: f64) {
        self.progress.set(progress);
    }

    /// Handle for writing progress from another thread.
    pub fn shared_progress(&self) -> SharedProgress {
        self.progress.clone()
    }

    pub fn mapper(&self) -> ProgressMapper {
        ProgressMapper::new(
            self.width,
            self.height,
            self.style.horizontal_padding,
            self.style.indicator_handle_radius,
        )
    }

    /// Indicator X; follows the pointer while dragging.
    pub fn progress_x(&self) -> f32 {
        self.drag
            .dragged_x()
            .unwrap_or_else(|| self.mapper().percentage_to_x(self.progress()))
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Pointer pressed. Returns whether the indicator was grabbed.
    pub fn pointer_down(&mut self, position: Vec2) -> bool {
        let mapper = self.mapper();
        let x = self.progress_x();
        self.drag.press(&mapper, x, position)
    }

    /// Pointer moved. Returns whether a drag consumed it.
    pub fn pointer_move(&mut self, x: f32) -> bool {
        if !self.drag.is_dragging() {
            return false;
        }
        let mapper = self.mapper();
        if let Some(progress) = self.drag.move_to(&mapper, x) {
            self.notify(progress);
        }
        true
    }

    /// Pointer released. Commits the dragged position as progress.
    pub fn pointer_up(&mut self) -> bool {
        let mapper = self.mapper();
        match self.drag.release(&mapper) {
            Some(progress) => {
                let progress = self.progress.set(progress);
                debug!(progress, "Seek committed");
                self.notify(progress);
                true
            }
            None => false,
        }
    }

    /// Abort a drag, e.g. when the gesture is taken over by a parent.
    pub fn pointer_cancel(&mut self) {
        self.drag.cancel();
    }

    fn notify(&self, progress: f64) {
        if let Some(listener) = &self.listener {
            listener.on_progress_changed(progress);
        }
    }

    /// Absolute seek position for the current progress.
    pub fn seek_position_ms(&self, duration_ms: i64) -> i64 {
        (duration_ms as f64 * self.progress() / 100.0) as i64
    }

    /// Geometry for the current state, or `None` before data is loaded.
    pub fn frame(&self) -> Option<Frame> {
        let envelope = self.envelope.as_ref()?;
        let progress_x = self.progress_x();

        let segments = layout::envelope_segments(
            envelope.batches(),
            envelope.samples().len(),
            self.width,
            self.height,
            &self.style,
            progress_x,
        );

        let (time_bar, ticks) = match &self.time_frames {
            Some(frames) => (
                Some(LineSegment::new(Vec2::ZERO, Vec2::new(self.width, 0.0))),
                layout::time_ticks(frames, self.width, self.style.horizontal_padding),
            ),
            None => (None, Vec::new()),
        };

        let indicator = self
            .style
            .show_progress
            .then(|| layout::indicator(&self.mapper(), progress_x, self.style.indicator_color));

        Some(Frame {
            segments,
            time_bar,
            ticks,
            indicator,
        })
    }
}

impl Default for WaveformSlideBar {
    fn default() -> Self {
        Self::new(WaveformStyle::default())
    }
}
