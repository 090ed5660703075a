//! Charts module - Chart rendering

mod plotter;
mod renderer;

pub use plotter::{BarData, ChartPlotter, InteractiveChart, ScatterData};
pub use renderer::{ChartStyle, RenderError, StaticChartRenderer, BAR_GREEN, LINE_BLUE, SKY_BLUE};
