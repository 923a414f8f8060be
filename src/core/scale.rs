use crate::core::types::PlotArea;
use crate::error::{ChartError, ChartResult};

/// Places sample indices at even horizontal spacing across the plot width.
///
/// The index is the position inside a series, not a timestamp, so the first
/// sample lands on the left edge and the last one on the right edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexScale {
    sample_count: usize,
    step: f64,
}

impl IndexScale {
    pub fn new(width: f64, sample_count: usize) -> ChartResult<Self> {
        if sample_count < 2 {
            return Err(ChartError::InvalidInput(format!(
                "series need at least 2 data points to span the chart, got {sample_count}"
            )));
        }
        if !width.is_finite() || width <= 0.0 {
            return Err(ChartError::InvalidSettings(
                "chart width must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            sample_count,
            step: width / (sample_count - 1) as f64,
        })
    }

    #[must_use]
    pub fn sample_count(self) -> usize {
        self.sample_count
    }

    /// Horizontal distance between two neighbouring samples.
    #[must_use]
    pub fn step(self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn index_to_pixel(self, index: usize, area: PlotArea) -> f64 {
        area.origin.x + self.step * index as f64
    }
}

/// Linear map from `[min, max]` onto the plot rows, inverted so larger
/// values sit higher on a top-down surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    min: f64,
    max: f64,
}

impl ValueScale {
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::InvalidSettings(
                "value axis bounds must be finite".to_owned(),
            ));
        }
        if max <= min {
            return Err(ChartError::InvalidSettings(format!(
                "value axis max ({max}) must be greater than min ({min})"
            )));
        }

        Ok(Self { min, max })
    }

    #[must_use]
    pub fn bounds(self) -> (f64, f64) {
        (self.min, self.max)
    }

    #[must_use]
    pub fn value_to_pixel(self, value: f64, area: PlotArea) -> f64 {
        let normalized = (value - self.min) / (self.max - self.min);
        area.origin.y + area.height - area.height * normalized
    }

    #[must_use]
    pub fn pixel_to_value(self, pixel: f64, area: PlotArea) -> f64 {
        let normalized = (area.origin.y + area.height - pixel) / area.height;
        self.min + normalized * (self.max - self.min)
    }
}
