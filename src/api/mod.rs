mod chart;
mod chart_settings;
mod line_chart;

pub use chart::{Chart, LegendEntry};
pub use chart_settings::{ChartSettings, ValueFormatter, ValueFormatterFn};
pub use line_chart::{LineChart, POINT_MARKER_SEGMENTS, VALUE_LABEL_OFFSET_PX, X_AXIS_LABEL_GAP_PX};
