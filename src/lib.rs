//! physlog-chart: line-chart layout engine for physics-log summaries.
//!
//! Series of uniformly spaced samples are mapped onto a plot rectangle and
//! drawn through an immediate-mode [`render::DrawingSurface`]. Layout is pure
//! and synchronous; backends only receive draw calls.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Chart, ChartSettings, LegendEntry, LineChart};
pub use error::{ChartError, ChartResult};
