//! Report rendering: narrative summary and chart-ready series

mod narrative;
mod series;

pub use narrative::render_narrative;
pub use series::{render_series, ChartSeries, ScatterPoint, TimelineSegment};
