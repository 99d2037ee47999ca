//! Colors used by the slide bar style.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// RGBA color with 32-bit float components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color from RGBA components.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from RGB with alpha = 1.0.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    // Presets matching the classic toolkit palette (0x44 / 0x88 grays).
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GRAY: Self = Self::rgb(0x88 as f32 / 255.0, 0x88 as f32 / 255.0, 0x88 as f32 / 255.0);
    pub const DARK_GRAY: Self =
        Self::rgb(0x44 as f32 / 255.0, 0x44 as f32 / 255.0, 0x44 as f32 / 255.0);
}
