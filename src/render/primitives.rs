use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels.
    #[must_use]
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            f64::from(alpha) / 255.0,
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Horizontal text alignment: which edge of the text box sits on the anchor x.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment: which edge of the text box sits on the anchor y.
///
/// `Top` lays the text out below the anchor, `Bottom` above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextVAlign {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextAnchor {
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
}

impl TextAnchor {
    pub const CENTER: Self = Self::new(TextHAlign::Center, TextVAlign::Middle);
    /// Horizontally centered, text hangs below the anchor.
    pub const TOP_CENTER: Self = Self::new(TextHAlign::Center, TextVAlign::Top);
    /// Horizontally centered, text rests on the anchor.
    pub const BOTTOM_CENTER: Self = Self::new(TextHAlign::Center, TextVAlign::Bottom);

    #[must_use]
    pub const fn new(h_align: TextHAlign, v_align: TextVAlign) -> Self {
        Self { h_align, v_align }
    }

    /// Fractional offset of the anchor inside a text box, `(0, 0)` being the
    /// top-left corner.
    #[must_use]
    pub fn fraction(self) -> (f64, f64) {
        let x = match self.h_align {
            TextHAlign::Left => 0.0,
            TextHAlign::Center => 0.5,
            TextHAlign::Right => 1.0,
        };
        let y = match self.v_align {
            TextVAlign::Top => 0.0,
            TextVAlign::Middle => 0.5,
            TextVAlign::Bottom => 1.0,
        };
        (x, y)
    }
}

/// Contrast stroke drawn around glyphs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextOutline {
    pub thickness: f64,
    pub color: Color,
}

impl TextOutline {
    #[must_use]
    pub const fn new(thickness: f64, color: Color) -> Self {
        Self { thickness, color }
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub from: Point,
    pub to: Point,
    pub thickness: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(from: Point, to: Point, thickness: f64, color: Color) -> Self {
        Self {
            from,
            to,
            thickness,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.thickness.is_finite() || self.thickness <= 0.0 {
            return Err(ChartError::InvalidData(
                "line thickness must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one filled point marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub center: Point,
    pub radius: f64,
    pub color: Color,
    pub segments: u32,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(center: Point, radius: f64, color: Color, segments: u32) -> Self {
        Self {
            center,
            radius,
            color,
            segments,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.center.is_finite() {
            return Err(ChartError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        if self.segments < 3 {
            return Err(ChartError::InvalidData(
                "circle needs at least 3 segments".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub position: Point,
    pub anchor: TextAnchor,
    pub scale: f64,
    pub color: Color,
    pub outline: Option<TextOutline>,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        position: Point,
        anchor: TextAnchor,
        scale: f64,
        color: Color,
    ) -> Self {
        Self {
            text: text.into(),
            position,
            anchor,
            scale,
            color,
            outline: None,
        }
    }

    #[must_use]
    pub fn with_outline(mut self, outline: TextOutline) -> Self {
        self.outline = Some(outline);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.position.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ChartError::InvalidData(
                "text scale must be finite and > 0".to_owned(),
            ));
        }
        if let Some(outline) = self.outline {
            if !outline.thickness.is_finite() || outline.thickness <= 0.0 {
                return Err(ChartError::InvalidData(
                    "text outline thickness must be finite and > 0".to_owned(),
                ));
            }
            outline.color.validate()?;
        }
        self.color.validate()
    }
}
