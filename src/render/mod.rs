mod frame;
mod null_renderer;
mod primitives;
mod surface;

pub use frame::{DrawCommand, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, TextAnchor, TextHAlign, TextOutline, TextPrimitive,
    TextVAlign,
};
pub use surface::DrawingSurface;

use crate::error::ChartResult;

/// Contract implemented by any frame-consuming backend.
///
/// Backends receive a fully recorded `RenderFrame`, so drawing code stays
/// isolated from series layout.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer, CairoSurface};
