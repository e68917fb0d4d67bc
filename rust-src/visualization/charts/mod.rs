//! Chart renderers. Each draws one chart type into a mount point.
//!
//! A missing mount is a no-op and an empty dataset shows the empty-state
//! placeholder. Otherwise the mount's content is fully replaced.

mod bar;
mod line;
mod pie;
mod polar;
mod radar;

pub use bar::render_bar_chart;
pub use line::render_line_chart;
pub use pie::{render_pie_chart, DOUGHNUT_INNER_RATIO};
pub use polar::render_polar_area_chart;
pub use radar::{render_radar_chart, RadarData, RadarSeries};

use super::geometry::{axis_bottom, axis_left, grid_left, style_axis, Margin, Size};
use super::scale::{value_domain, LinearScale, NICE_COUNT};
use super::scene::{translate, Element};


/// Tick count for the value axis of cartesian charts.
const VALUE_TICKS: usize = 4;


/// One chart mark: a category label, its value and the hover text.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDatum {
    pub label: String,
    pub value: f64,
    pub tooltip: Option<String>,
}


impl ChartDatum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            tooltip: None,
        }
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Hover text, falling back to `label: value`.
    pub fn tooltip_text(&self) -> String {
        match self.tooltip.as_deref() {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => format!("{}: {}", self.label, self.value),
        }
    }
}


/// Plot group of a cartesian chart with gridlines and value axis already drawn.
struct CartesianFrame {
    plot: Element,
    y: LinearScale,
    inner: Size,
}


impl CartesianFrame {
    fn new(size: Size, margin: Margin, data: &[ChartDatum]) -> Self {
        let inner = margin.inner(size.width, size.height);
        let y = LinearScale::new(value_domain(data.iter().map(|d| d.value)), (inner.height, 0.0))
            .nice(NICE_COUNT);

        let mut axis = axis_left(&y, VALUE_TICKS);
        style_axis(&mut axis);

        let plot = Element::new("g")
            .attr("transform", translate(margin.left, margin.top))
            .child(grid_left(&y, VALUE_TICKS, inner.width))
            .child(axis);

        Self { plot, y, inner }
    }

    /// Category axis with one tick per datum at the given horizontal centers.
    fn push_category_axis(&mut self, data: &[ChartDatum], centers: impl Iterator<Item = f64>) {
        let ticks: Vec<(f64, &str)> = centers.zip(data.iter().map(|d| d.label.as_str())).collect();
        let mut axis = axis_bottom(&ticks, self.inner.width, self.inner.height);
        style_axis(&mut axis);
        self.plot.push(axis);
    }
}
