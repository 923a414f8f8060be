use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Where a series draws its value labels relative to each point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPosition {
    /// Above the point, joined to it by a short connector.
    #[default]
    Top,
    /// Centered on the point.
    Middle,
    /// Below the point, joined to it by a short connector.
    Bottom,
}

/// One sample of a series.
///
/// A NaN `value` marks a missing sample and breaks the line at that index.
#[derive(Debug, Clone, PartialEq)]
pub struct LineDataPoint {
    pub value: f64,
    pub color: Option<Color>,
    pub x_axis_label: Option<String>,
}

impl LineDataPoint {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            color: None,
            x_axis_label: None,
        }
    }

    /// Sample with no value.
    #[must_use]
    pub fn missing() -> Self {
        Self::new(f64::NAN)
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_x_axis_label(mut self, label: impl Into<String>) -> Self {
        self.x_axis_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn has_value(&self) -> bool {
        !self.value.is_nan()
    }
}

impl From<f64> for LineDataPoint {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// Named, styled sequence of samples sharing the chart's index axis.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub data: Vec<LineDataPoint>,
    /// Draw-order key. Lower depths are painted first.
    pub depth: i32,
    pub line_color: Color,
    pub line_thickness: f64,
    /// Marker radius before UI scaling; `0.0` disables markers.
    pub point_size: f64,
    pub point_color: Option<Color>,
    pub show_labels: bool,
    pub label_position: LabelPosition,
    pub label_font_mult: f64,
}

impl LineSeries {
    #[must_use]
    pub fn new(name: impl Into<String>, data: Vec<LineDataPoint>) -> Self {
        Self {
            name: name.into(),
            data,
            depth: 0,
            line_color: Color::WHITE,
            line_thickness: 1.0,
            point_size: 0.0,
            point_color: None,
            show_labels: false,
            label_position: LabelPosition::default(),
            label_font_mult: 1.0,
        }
    }

    /// Builds a series from raw values; NaN entries become gaps.
    #[must_use]
    pub fn from_values(name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self::new(name, values.into_iter().map(LineDataPoint::new).collect())
    }

    #[must_use]
    pub fn with_depth(mut self, depth: i32) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_line_style(mut self, color: Color, thickness: f64) -> Self {
        self.line_color = color;
        self.line_thickness = thickness;
        self
    }

    #[must_use]
    pub fn with_points(mut self, size: f64, color: Option<Color>) -> Self {
        self.point_size = size;
        self.point_color = color;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, position: LabelPosition, font_mult: f64) -> Self {
        self.show_labels = true;
        self.label_position = position;
        self.label_font_mult = font_mult;
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checks styling and samples before the series is handed to a chart.
    ///
    /// Samples must be finite or NaN; infinities are rejected rather than
    /// treated as gaps.
    pub fn validate(&self) -> ChartResult<()> {
        self.line_color.validate()?;
        if let Some(color) = self.point_color {
            color.validate()?;
        }
        if !self.line_thickness.is_finite() || self.line_thickness <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "series `{}` line thickness must be finite and > 0",
                self.name
            )));
        }
        if !self.point_size.is_finite() || self.point_size < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "series `{}` point size must be finite and >= 0",
                self.name
            )));
        }
        if !self.label_font_mult.is_finite() || self.label_font_mult <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "series `{}` label font multiplier must be finite and > 0",
                self.name
            )));
        }

        for (index, point) in self.data.iter().enumerate() {
            if point.value.is_infinite() {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` sample {index} must be finite or NaN",
                    self.name
                )));
            }
            if let Some(color) = point.color {
                color.validate()?;
            }
        }
        Ok(())
    }

    /// Marker color for `point`: the point override, then the series point
    /// color, then the line color.
    #[must_use]
    pub fn marker_color(&self, point: &LineDataPoint) -> Color {
        point
            .color
            .or(self.point_color)
            .unwrap_or(self.line_color)
    }
}

#[cfg(test)]
mod tests {
    use super::{LineDataPoint, LineSeries};
    use crate::render::Color;

    #[test]
    fn marker_color_falls_back_in_order() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        let green = Color::rgb(0.0, 1.0, 0.0);
        let blue = Color::rgb(0.0, 0.0, 1.0);

        let series = LineSeries::from_values("speed", [1.0]).with_line_style(blue, 1.0);
        let plain = LineDataPoint::new(1.0);
        let overridden = LineDataPoint::new(1.0).with_color(red);
        assert_eq!(series.marker_color(&plain), blue);
        assert_eq!(series.marker_color(&overridden), red);

        let series = series.with_points(2.0, Some(green));
        assert_eq!(series.marker_color(&plain), green);
        assert_eq!(series.marker_color(&overridden), red);
    }

    #[test]
    fn validate_rejects_broken_styling() {
        let series = LineSeries::from_values("speed", [1.0, f64::NAN, 2.0]);
        assert!(series.validate().is_ok());

        assert!(series.clone().with_line_style(Color::WHITE, 0.0).validate().is_err());
        assert!(
            series
                .clone()
                .with_line_style(Color::rgb(2.0, 0.0, 0.0), 1.0)
                .validate()
                .is_err()
        );
        assert!(series.clone().with_points(-1.0, None).validate().is_err());
        assert!(
            series
                .clone()
                .with_points(1.0, Some(Color::rgba(0.0, 0.0, 0.0, f64::NAN)))
                .validate()
                .is_err()
        );
        assert!(
            series
                .clone()
                .with_labels(super::LabelPosition::Top, 0.0)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn validate_rejects_infinite_samples() {
        let series = LineSeries::from_values("speed", [1.0, f64::NEG_INFINITY]);
        assert!(matches!(
            series.validate(),
            Err(crate::error::ChartError::InvalidData(_))
        ));

        let tinted = LineSeries::new(
            "speed",
            vec![LineDataPoint::new(1.0).with_color(Color::rgb(0.0, -1.0, 0.0))],
        );
        assert!(tinted.validate().is_err());
    }

    #[test]
    fn from_values_keeps_gaps() {
        let series = LineSeries::from_values("speed", [1.0, f64::NAN, 3.0]);
        assert_eq!(series.len(), 3);
        assert!(series.data[0].has_value());
        assert!(!series.data[1].has_value());
        assert!(!LineDataPoint::missing().has_value());
    }
}
