//! Progress change notification.
//!
//! Listeners are plain synchronous callbacks. [`ChannelListener`] forwards
//! into a crossbeam channel for consumers living on another thread, such as
//! the code that seeks the player.

use crate::progress::clamp_progress;
use crossbeam_channel::Sender;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

/// Receives progress percentages in `[0, 100]`.
pub trait ProgressListener: Send {
    fn on_progress_changed(&self, progress: f64);
}

impl<F> ProgressListener for F
where
    F: Fn(f64) + Send,
{
    fn on_progress_changed(&self, progress: f64) {
        self(progress)
    }
}

/// Sends progress updates over a channel.
#[derive(Debug, Clone)]
pub struct ChannelListener {
    sender: Sender<f64>,
}

impl ChannelListener {
    pub fn new(sender: Sender<f64>) -> Self {
        Self { sender }
    }
}

impl ProgressListener for ChannelListener {
    fn on_progress_changed(&self, progress: f64) {
        if self.sender.send(progress).is_err() {
            debug!(progress, "Progress receiver dropped, update discarded");
        }
    }
}

/// Progress shared between the input layer and the playback poller.
///
/// Writes are serialized and the last writer wins; a drag and a playback
/// tick both converge on the player's position anyway.
#[derive(Debug, Clone, Default)]
pub struct SharedProgress {
    inner: Arc<Mutex<f64>>,
}

impl SharedProgress {
    pub fn new(progress: f64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(clamp_progress(progress))),
        }
    }

    /// Current progress.
    pub fn get(&self) -> f64 {
        *self.inner.lock()
    }

    /// Store a clamped progress value and return it.
    pub fn set(&self, progress: f64) -> f64 {
        let clamped = clamp_progress(progress);
        *self.inner.lock() = clamped;
        clamped
    }
}
