//! Style configuration for the slide bar.
//!
//! One parameterized style replaces per-variant hardcoded constants. Missing
//! fields in a JSON document fall back to the defaults below.

use crate::progress::NotifyMode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;
use waveslide_core::{Color, Result, WaveformError};

/// Drawing and interaction parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveformStyle {
    /// Envelope color ahead of the playback position.
    pub waveform_color: Color,
    /// Envelope color for the part already played.
    pub waveform_progress_color: Color,
    pub indicator_color: Color,
    pub time_bar_color: Color,
    pub waveform_stroke_width: f32,
    pub indicator_line_width: f32,
    pub time_bar_text_size: f32,
    /// Draw the progress indicator and tint the played envelope.
    pub show_progress: bool,
    pub horizontal_padding: f32,
    pub vertical_padding: f32,
    pub indicator_handle_radius: f32,
    pub notify_mode: NotifyMode,
}

impl Default for WaveformStyle {
    fn default() -> Self {
        Self {
            waveform_color: Color::DARK_GRAY,
            waveform_progress_color: Color::GRAY,
            indicator_color: Color::RED,
            time_bar_color: Color::GRAY,
            waveform_stroke_width: 2.0,
            indicator_line_width: 4.0,
            time_bar_text_size: 20.0,
            show_progress: false,
            horizontal_padding: 50.0,
            vertical_padding: 50.0,
            indicator_handle_radius: 20.0,
            notify_mode: NotifyMode::OnRelease,
        }
    }
}

impl WaveformStyle {
    /// Parse a style from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let style: Self = serde_json::from_str(json)
            .map_err(|e| WaveformError::Serialization(e.to_string()))?;
        style.validate()?;
        Ok(style)
    }

    /// Load a style from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let style = Self::from_json(&json)?;
        info!(path = %path.display(), "Loaded waveform style");
        Ok(style)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| WaveformError::Serialization(e.to_string()))
    }

    /// Reject geometry that cannot be laid out.
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("horizontal_padding", self.horizontal_padding),
            ("vertical_padding", self.vertical_padding),
            ("waveform_stroke_width", self.waveform_stroke_width),
            ("indicator_line_width", self.indicator_line_width),
            ("time_bar_text_size", self.time_bar_text_size),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(WaveformError::InvalidArgument(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if !self.indicator_handle_radius.is_finite() || self.indicator_handle_radius <= 0.0 {
            return Err(WaveformError::InvalidArgument(format!(
                "indicator_handle_radius must be positive, got {}",
                self.indicator_handle_radius
            )));
        }
        Ok(())
    }
}
