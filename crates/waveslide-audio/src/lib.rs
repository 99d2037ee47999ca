//! Waveslide Audio - sample decoding and decimation
//!
//! Turns raw PCM16 mono bytes into something a slide bar can draw.
//!
//! Architecture:
//! - `pcm`: little-endian PCM16 byte stream to `i16` amplitudes
//! - `format`: checks an extractor's track description before decoding
//! - `envelope`: per-pixel-column min/max batches with extrema positions
//! - `playback`: player position polling to progress percentages

pub mod envelope;
pub mod format;
pub mod pcm;
pub mod playback;

pub use envelope::{batch_samples, Batch, Envelope};
pub use format::{FormatValidator, MediaDescription, PcmEncoding, TrackFormat};
pub use pcm::{decode, decode_valid, PcmBuffer};
pub use playback::{PlaybackState, PlaybackTracker};
