pub mod line_series;
pub mod scale;
pub mod types;

pub use line_series::{LabelPosition, LineDataPoint, LineSeries};
pub use scale::{IndexScale, ValueScale};
pub use types::{PlotArea, Point};
