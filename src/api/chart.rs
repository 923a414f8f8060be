use serde::{Deserialize, Serialize};

use crate::api::ChartSettings;
use crate::core::Point;
use crate::error::ChartResult;
use crate::render::{Color, DrawingSurface, RenderFrame, Renderer};

/// One legend row for host UI chrome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub name: String,
    pub color: Color,
}

impl LegendEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// Capability shared by every chart kind.
///
/// A chart owns its settings and data; rendering only issues calls on the
/// surface it is handed and keeps nothing from one pass to the next.
pub trait Chart {
    fn settings(&self) -> &ChartSettings;

    /// Top-left corner of the plot area.
    fn position(&self) -> Point;

    /// Legend rows in draw order.
    fn legend_entries(&self) -> Vec<LegendEntry>;

    /// Draws all data of the chart for one frame.
    fn render_data_points(&self, surface: &mut dyn DrawingSurface);

    /// Records one pass into a backend-agnostic frame.
    fn build_render_frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::new();
        self.render_data_points(&mut frame);
        frame
    }

    /// Records one pass and hands it to `renderer`.
    fn render_with<R: Renderer>(&self, renderer: &mut R) -> ChartResult<()>
    where
        Self: Sized,
    {
        let frame = self.build_render_frame();
        renderer.render(&frame)
    }
}
