use tracing::{debug, trace, warn};

use crate::api::{Chart, ChartSettings, LegendEntry};
use crate::core::{
    IndexScale, LabelPosition, LineDataPoint, LineSeries, PlotArea, Point, ValueScale,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingSurface, TextAnchor, TextOutline};

/// Edge count used for point markers on tessellating surfaces.
pub const POINT_MARKER_SEGMENTS: u32 = 10;
/// Distance between a point and its Top/Bottom value label, before UI scaling.
pub const VALUE_LABEL_OFFSET_PX: f64 = 10.0;
/// Gap between an X-axis tick and its label, before UI scaling.
pub const X_AXIS_LABEL_GAP_PX: f64 = 5.0;

/// Multi-series line chart over a shared, evenly spaced index axis.
#[derive(Debug, Clone)]
pub struct LineChart {
    settings: ChartSettings,
    area: PlotArea,
    value_scale: ValueScale,
    index_scale: Option<IndexScale>,
    series: Vec<LineSeries>,
}

impl LineChart {
    pub fn new(settings: ChartSettings) -> ChartResult<Self> {
        settings.validate()?;
        let value_scale = settings.value_scale()?;

        Ok(Self {
            area: settings.plot_area(),
            settings,
            value_scale,
            index_scale: None,
            series: Vec::new(),
        })
    }

    /// Replaces all series.
    ///
    /// Every series must hold the same number of samples, at least two, and
    /// pass `LineSeries::validate`. The series are stored sorted by ascending depth, keeping insertion order
    /// among equal depths. On error the previous series stay in place.
    pub fn set_series(&mut self, mut series: Vec<LineSeries>) -> ChartResult<()> {
        let Some(first) = series.first() else {
            warn!("rejected empty series list");
            return Err(ChartError::InvalidInput(
                "at least one series is required".to_owned(),
            ));
        };

        let expected = first.len();
        if let Some(mismatch) = series.iter().find(|s| s.len() != expected) {
            warn!(
                series = %mismatch.name,
                expected,
                actual = mismatch.len(),
                "rejected series with mismatched sample count"
            );
            return Err(ChartError::SeriesLengthMismatch {
                series: mismatch.name.clone(),
                expected,
                actual: mismatch.len(),
            });
        }

        for candidate in &series {
            candidate.validate().inspect_err(|err| {
                warn!(series = %candidate.name, error = %err, "rejected invalid series");
            })?;
        }

        let index_scale = IndexScale::new(self.area.width, expected).inspect_err(|err| {
            warn!(error = %err, sample_count = expected, "rejected series");
        })?;

        series.sort_by_key(|s| s.depth);
        debug!(
            series_count = series.len(),
            sample_count = expected,
            x_position_factor = index_scale.step(),
            "set line chart series"
        );

        self.index_scale = Some(index_scale);
        self.series = series;
        Ok(())
    }

    /// Series in draw order.
    #[must_use]
    pub fn series(&self) -> &[LineSeries] {
        &self.series
    }

    /// Samples per series, once series are set.
    #[must_use]
    pub fn sample_count(&self) -> Option<usize> {
        self.index_scale.map(IndexScale::sample_count)
    }

    /// Horizontal pixel distance between neighbouring samples.
    #[must_use]
    pub fn x_position_factor(&self) -> Option<f64> {
        self.index_scale.map(IndexScale::step)
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.area
    }

    /// Moves the plot area; subsequent passes map against the new corner.
    pub fn set_position(&mut self, position: Point) -> ChartResult<()> {
        if !position.is_finite() {
            return Err(ChartError::InvalidInput(
                "chart position must be finite".to_owned(),
            ));
        }
        self.area.origin = position;
        self.settings.position = position;
        Ok(())
    }

    /// Pixel x of sample `index`; `None` until series are set.
    #[must_use]
    pub fn x_position(&self, index: usize) -> Option<f64> {
        self.index_scale
            .map(|scale| scale.index_to_pixel(index, self.area))
    }

    /// Pixel y of `value` within the configured value range.
    #[must_use]
    pub fn y_position(&self, value: f64) -> f64 {
        self.value_scale.value_to_pixel(value, self.area)
    }

    /// Draws one series: segments, point markers and value labels.
    ///
    /// Missing samples break the line. Value labels trail by one sample, so a
    /// point is labelled while its successor is drawn: the first sample, the
    /// last sample and any sample right before a gap stay unlabelled.
    pub fn render_series(&self, series: &LineSeries, surface: &mut dyn DrawingSurface) {
        let Some(index_scale) = self.index_scale else {
            return;
        };
        let scale = self.settings.scale;
        let mut previous: Option<(Point, &LineDataPoint)> = None;

        for (index, point) in series.data.iter().enumerate() {
            if !point.has_value() {
                previous = None;
                continue;
            }

            let position = Point::new(
                index_scale.index_to_pixel(index, self.area),
                self.y_position(point.value),
            );

            if series.point_size > 0.0 {
                surface.draw_circle(
                    position,
                    series.point_size * scale,
                    series.marker_color(point),
                    POINT_MARKER_SEGMENTS,
                );
            }

            if let Some((previous_position, previous_point)) = previous {
                surface.draw_line(
                    position,
                    previous_position,
                    series.line_color,
                    series.line_thickness * scale,
                );

                if index > 1 && series.show_labels {
                    self.draw_value_label(series, previous_point, previous_position, surface);
                }
            }

            previous = Some((position, point));
        }
    }

    /// Draws the value label of `point` at `anchor`.
    ///
    /// Top/Bottom connectors are drawn even when the formatter yields empty
    /// text; only the text itself is skipped.
    fn draw_value_label(
        &self,
        series: &LineSeries,
        point: &LineDataPoint,
        anchor: Point,
        surface: &mut dyn DrawingSurface,
    ) {
        let settings = &self.settings;
        let text = settings.y_axis_label_formatter.format(point.value);
        let outline = TextOutline::new((2.0 * settings.scale).max(1.0), Color::BLACK);
        let text_scale = settings.font_mult * series.label_font_mult * settings.scale;

        let (direction, text_anchor) = match series.label_position {
            LabelPosition::Middle => {
                if text.is_empty() {
                    return;
                }
                surface.draw_outlined_text(
                    &text,
                    anchor,
                    TextAnchor::CENTER,
                    text_scale,
                    settings.axis_label_color,
                    outline,
                );
                return;
            }
            LabelPosition::Top => (-1.0, TextAnchor::BOTTOM_CENTER),
            LabelPosition::Bottom => (1.0, TextAnchor::TOP_CENTER),
        };

        let label_position =
            anchor.offset(0.0, VALUE_LABEL_OFFSET_PX * settings.scale * direction);
        surface.draw_line(
            anchor,
            label_position,
            settings.grid_line_color,
            settings.grid_line_thickness * settings.scale,
        );
        if text.is_empty() {
            return;
        }
        surface.draw_outlined_text(
            &text,
            label_position,
            text_anchor,
            text_scale,
            settings.axis_label_color,
            outline,
        );
    }

    /// Draws the shared X-axis ticks, labelled from the first series' points.
    pub fn render_x_axis_ticks_and_labels(&self, surface: &mut dyn DrawingSurface) {
        let (Some(first), Some(index_scale)) = (self.series.first(), self.index_scale) else {
            return;
        };
        let settings = &self.settings;
        let tick_thickness = (settings.axis_tick_thickness * settings.scale).max(1.0);
        let text_scale = settings.font_mult * settings.axis_label_font_mult * settings.scale;

        for (index, point) in first.data.iter().enumerate() {
            let position = Point::new(
                index_scale.index_to_pixel(index, self.area),
                self.area.bottom(),
            );
            let tick_end = position.offset(0.0, settings.axis_tick_length * settings.scale);
            surface.draw_line(position, tick_end, settings.axis_color, tick_thickness);

            if !settings.show_x_axis_labels {
                continue;
            }
            if let Some(label) = point.x_axis_label.as_deref().filter(|label| !label.is_empty()) {
                surface.draw_text(
                    label,
                    tick_end.offset(0.0, X_AXIS_LABEL_GAP_PX * settings.scale),
                    TextAnchor::TOP_CENTER,
                    text_scale,
                    settings.axis_label_color,
                );
            }
        }
    }
}

impl Chart for LineChart {
    fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    fn position(&self) -> Point {
        self.area.origin
    }

    fn legend_entries(&self) -> Vec<LegendEntry> {
        self.series
            .iter()
            .map(|series| LegendEntry::new(series.name.clone(), series.line_color))
            .collect()
    }

    fn render_data_points(&self, surface: &mut dyn DrawingSurface) {
        if self.series.is_empty() {
            debug!("skipping line chart render: no series set");
            return;
        }
        trace!(series_count = self.series.len(), "render line chart");

        for series in &self.series {
            self.render_series(series, surface);
        }
        self.render_x_axis_ticks_and_labels(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::LineChart;
    use crate::api::{Chart, ChartSettings};
    use crate::core::{LineSeries, Point};
    use crate::error::ChartError;

    fn chart() -> LineChart {
        let settings =
            ChartSettings::new(Point::new(0.0, 0.0), 100.0, 100.0).with_value_range(0.0, 4.0);
        LineChart::new(settings).expect("valid settings")
    }

    #[test]
    fn single_sample_series_is_invalid_input() {
        let mut chart = chart();
        let err = chart
            .set_series(vec![LineSeries::from_values("a", [1.0])])
            .expect_err("one sample cannot span the chart");
        assert!(matches!(err, ChartError::InvalidInput(_)));
        assert!(chart.series().is_empty());
        assert_eq!(chart.x_position_factor(), None);
    }

    #[test]
    fn render_without_series_draws_nothing() {
        let chart = chart();
        assert!(chart.build_render_frame().is_empty());
        assert!(chart.legend_entries().is_empty());
    }

    #[test]
    fn inverted_value_range_is_rejected() {
        let settings =
            ChartSettings::new(Point::new(0.0, 0.0), 100.0, 100.0).with_value_range(4.0, 0.0);
        let err = LineChart::new(settings).expect_err("max below min");
        assert!(matches!(err, ChartError::InvalidSettings(_)));
    }
}
