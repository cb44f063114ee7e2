use serde::{Deserialize, Serialize};

use crate::*;

/// Accent used for text, borders, and clicked cells.
pub const ACCENT: Color = Color::new(210, 255, 77);
/// Button body fill.
pub const BODY: Color = Color::new(0, 37, 53);
/// Button drop shadow.
pub const SHADOW: Color = Color::new(0, 51, 37);

/// RGB color with 8-bit channels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Per-channel shift toward white, saturating at 255.
    pub const fn lighter(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_add(amount),
            g: self.g.saturating_add(amount),
            b: self.b.saturating_add(amount),
        }
    }

    /// Per-channel shift toward black, saturating at 0.
    pub const fn darker(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_sub(amount),
            g: self.g.saturating_sub(amount),
            b: self.b.saturating_sub(amount),
        }
    }
}

/// Visual configuration for [`Button`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ButtonStyle {
    pub size: (f32, f32),
    pub fill: Color,
    pub text_color: Color,
    pub border_color: Color,
    pub border_width: f32,
    pub shadow_offset: (f32, f32),
    pub shadow_color: Color,
    /// Cue played on click; the default cue is used when unset.
    pub sound: Option<SoundCue>,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            size: (140.0, 40.0),
            fill: BODY,
            text_color: ACCENT,
            border_color: ACCENT,
            border_width: 3.0,
            shadow_offset: (8.0, 8.0),
            shadow_color: SHADOW,
            sound: None,
        }
    }
}

/// Visual configuration for [`Slider`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SliderStyle {
    pub track_color: Color,
    pub handle_color: Color,
    pub track_height: f32,
    pub handle_width: f32,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            track_color: Color::new(200, 200, 200),
            handle_color: Color::new(255, 0, 66),
            track_height: 5.0,
            handle_width: 20.0,
        }
    }
}
