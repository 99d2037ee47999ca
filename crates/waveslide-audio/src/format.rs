//! Source format validation.
//!
//! The slide bar only understands single-track PCM16 mono. Extractors
//! describe what they found and the validator decides before any bytes are
//! decoded. Keys an extractor could not read are not treated as errors.

use serde::{Deserialize, Serialize};
use tracing::warn;
use waveslide_core::{Result, WaveformError};

/// Sample rate the time axis assumes unless told otherwise.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// PCM sample encodings an extractor may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PcmEncoding {
    Pcm8,
    Pcm16,
    Pcm24,
    Pcm32,
    Float,
}

/// Format keys reported for one track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackFormat {
    pub encoding: Option<PcmEncoding>,
    pub channel_count: Option<u16>,
    pub sample_rate: Option<u32>,
}

impl TrackFormat {
    /// The format the decoder expects.
    pub fn pcm16_mono(sample_rate: u32) -> Self {
        Self {
            encoding: Some(PcmEncoding::Pcm16),
            channel_count: Some(1),
            sample_rate: Some(sample_rate),
        }
    }
}

/// What an extractor found in a media source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaDescription {
    pub tracks: Vec<TrackFormat>,
}

impl MediaDescription {
    /// Description with a single track.
    pub fn single(track: TrackFormat) -> Self {
        Self {
            tracks: vec![track],
        }
    }
}

/// Checks that a source can be fed to [`crate::pcm::decode`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatValidator {
    pub expected_sample_rate: u32,
    /// Reject sample rate mismatches instead of only reporting them.
    pub strict_sample_rate: bool,
}

impl Default for FormatValidator {
    fn default() -> Self {
        Self {
            expected_sample_rate: DEFAULT_SAMPLE_RATE,
            strict_sample_rate: false,
        }
    }
}

impl FormatValidator {
    /// Validate the first track of `media` and return it.
    pub fn validate<'a>(&self, media: &'a MediaDescription) -> Result<&'a TrackFormat> {
        let track = media.tracks.first().ok_or_else(|| {
            WaveformError::UnsupportedFormat("no media tracks found".to_string())
        })?;

        if let Some(encoding) = track.encoding {
            if encoding != PcmEncoding::Pcm16 {
                return Err(WaveformError::UnsupportedFormat(format!(
                    "expected {:?} encoding, got {:?}",
                    PcmEncoding::Pcm16,
                    encoding
                )));
            }
        }

        if let Some(channels) = track.channel_count {
            if channels != 1 {
                return Err(WaveformError::UnsupportedFormat(format!(
                    "expected 1 channel, got {channels}"
                )));
            }
        }

        if let Some(rate) = track.sample_rate {
            if rate != self.expected_sample_rate {
                if self.strict_sample_rate {
                    return Err(WaveformError::UnsupportedFormat(format!(
                        "expected {} Hz sample rate, got {rate} Hz",
                        self.expected_sample_rate
                    )));
                }
                warn!(
                    expected = self.expected_sample_rate,
                    actual = rate,
                    "Sample rate mismatch, time axis may drift"
                );
            }
        }

        Ok(track)
    }
}
