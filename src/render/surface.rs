use crate::core::Point;
use crate::render::{Color, TextAnchor, TextOutline};

/// Immediate-mode drawing primitives the charts issue their output through.
///
/// Implementations hold no chart state between calls. Sizes arrive already
/// multiplied by the chart's UI scale. Text `scale` is a multiplier of the
/// backend's base font size.
pub trait DrawingSurface {
    fn draw_line(&mut self, from: Point, to: Point, color: Color, thickness: f64);

    /// Filled circle approximated with `segments` edges where the backend
    /// tessellates.
    fn draw_circle(&mut self, center: Point, radius: f64, color: Color, segments: u32);

    fn draw_text(
        &mut self,
        text: &str,
        position: Point,
        anchor: TextAnchor,
        scale: f64,
        color: Color,
    );

    fn draw_outlined_text(
        &mut self,
        text: &str,
        position: Point,
        anchor: TextAnchor,
        scale: f64,
        color: Color,
        outline: TextOutline,
    );
}
