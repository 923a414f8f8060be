use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, Point, ValueScale};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

pub type ValueFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// Turns a sample value into label text.
#[derive(Clone)]
pub struct ValueFormatter(ValueFormatterFn);

impl ValueFormatter {
    #[must_use]
    pub fn new(format: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(format))
    }

    /// Fixed-point formatter with `decimals` fractional digits.
    #[must_use]
    pub fn fixed(decimals: usize) -> Self {
        Self::new(move |value| format!("{value:.decimals$}"))
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        (self.0)(value)
    }
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self::fixed(2)
    }
}

impl fmt::Debug for ValueFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueFormatter(..)")
    }
}

/// Chart geometry, value range and styling.
///
/// Serializable so hosts can persist chart setup; the formatter is code and is
/// restored to the default on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub position: Point,
    pub chart_width: f64,
    pub chart_height: f64,
    /// Uniform UI scale applied to every size, offset and font.
    pub scale: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub axis_color: Color,
    pub grid_line_color: Color,
    pub grid_line_thickness: f64,
    pub axis_label_color: Color,
    pub axis_tick_length: f64,
    pub axis_tick_thickness: f64,
    pub font_mult: f64,
    pub axis_label_font_mult: f64,
    pub show_x_axis_labels: bool,
    #[serde(skip)]
    pub y_axis_label_formatter: ValueFormatter,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            position: Point::default(),
            chart_width: 400.0,
            chart_height: 200.0,
            scale: 1.0,
            y_min: 0.0,
            y_max: 1.0,
            axis_color: Color::WHITE,
            grid_line_color: Color::GRAY,
            grid_line_thickness: 1.0,
            axis_label_color: Color::WHITE,
            axis_tick_length: 5.0,
            axis_tick_thickness: 1.0,
            font_mult: 1.0,
            axis_label_font_mult: 1.0,
            show_x_axis_labels: true,
            y_axis_label_formatter: ValueFormatter::default(),
        }
    }
}

impl ChartSettings {
    /// Settings for a `width` x `height` plot whose top-left corner is `position`.
    #[must_use]
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            position,
            chart_width: width,
            chart_height: height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_value_range(mut self, y_min: f64, y_max: f64) -> Self {
        self.y_min = y_min;
        self.y_max = y_max;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, axis: Color, grid_line: Color, axis_label: Color) -> Self {
        self.axis_color = axis;
        self.grid_line_color = grid_line;
        self.axis_label_color = axis_label;
        self
    }

    #[must_use]
    pub fn with_font_mults(mut self, font_mult: f64, axis_label_font_mult: f64) -> Self {
        self.font_mult = font_mult;
        self.axis_label_font_mult = axis_label_font_mult;
        self
    }

    #[must_use]
    pub fn with_x_axis_labels(mut self, show: bool) -> Self {
        self.show_x_axis_labels = show;
        self
    }

    #[must_use]
    pub fn with_y_axis_label_formatter(mut self, formatter: ValueFormatter) -> Self {
        self.y_axis_label_formatter = formatter;
        self
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        PlotArea::new(self.position, self.chart_width, self.chart_height)
    }

    pub fn value_scale(&self) -> ChartResult<ValueScale> {
        ValueScale::new(self.y_min, self.y_max)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.plot_area().is_valid() {
            return Err(ChartError::InvalidSettings(format!(
                "plot area must be finite with positive size, got {}x{} at ({}, {})",
                self.chart_width, self.chart_height, self.position.x, self.position.y
            )));
        }
        self.value_scale()?;

        for (field, value) in [
            ("scale", self.scale),
            ("grid_line_thickness", self.grid_line_thickness),
            ("font_mult", self.font_mult),
            ("axis_label_font_mult", self.axis_label_font_mult),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidSettings(format!(
                    "`{field}` must be finite and > 0"
                )));
            }
        }
        for (field, value) in [
            ("axis_tick_length", self.axis_tick_length),
            ("axis_tick_thickness", self.axis_tick_thickness),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidSettings(format!(
                    "`{field}` must be finite and >= 0"
                )));
            }
        }

        for color in [self.axis_color, self.grid_line_color, self.axis_label_color] {
            color
                .validate()
                .map_err(|err| ChartError::InvalidSettings(err.to_string()))?;
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart settings: {e}"))
        })
    }

    /// Parses settings JSON. Missing fields fall back to defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let settings: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart settings json: {e}"))
        })?;
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartSettings, ValueFormatter};
    use crate::core::Point;

    #[test]
    fn default_settings_are_valid() {
        ChartSettings::default().validate().expect("valid defaults");
    }

    #[test]
    fn fixed_formatter_rounds() {
        assert_eq!(ValueFormatter::fixed(1).format(2.345), "2.3");
        assert_eq!(ValueFormatter::default().format(1.0), "1.00");
    }

    #[test]
    fn zero_scale_is_rejected() {
        let settings = ChartSettings::new(Point::new(0.0, 0.0), 100.0, 50.0).with_scale(0.0);
        assert!(settings.validate().is_err());
    }
}
