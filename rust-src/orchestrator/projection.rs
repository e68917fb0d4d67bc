//! Per-chart datasets derived from the category summary.

use crate::aggregation::CategorySummary;
use crate::visualization::palette::{MAX_SERIES_FILL, MAX_SERIES_STROKE, MIN_SERIES_FILL, MIN_SERIES_STROKE};
use crate::visualization::{ChartDatum, RadarData, RadarSeries};


pub const MIN_SERIES_NAME: &str = "Min Value";
pub const MAX_SERIES_NAME: &str = "Max Value";


/// Datasets for the six charts of one render pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartProjections {
    /// Record count per category.
    pub bar: Vec<ChartDatum>,
    /// Average value per category.
    pub line: Vec<ChartDatum>,
    /// Record count per category.
    pub pie: Vec<ChartDatum>,
    /// Distinct locations per category.
    pub doughnut: Vec<ChartDatum>,
    /// Top location count per category.
    pub polar: Vec<ChartDatum>,
    /// Min and max value per category.
    pub radar: RadarData,
}


impl ChartProjections {
    pub fn from_summary(summary: &[CategorySummary]) -> Self {
        let tooltips: Vec<String> = summary.iter().map(summary_tooltip).collect();
        let project = |value: fn(&CategorySummary) -> f64| -> Vec<ChartDatum> {
            summary
                .iter()
                .zip(&tooltips)
                .map(|(item, tooltip)| ChartDatum::new(item.label.as_str(), value(item)).with_tooltip(tooltip.as_str()))
                .collect()
        };

        let radar = RadarData {
            labels: summary.iter().map(|item| item.label.clone()).collect(),
            series: vec![
                RadarSeries::new(
                    MIN_SERIES_NAME,
                    summary.iter().map(|item| item.min_value).collect(),
                    MIN_SERIES_STROKE,
                    MIN_SERIES_FILL,
                ),
                RadarSeries::new(
                    MAX_SERIES_NAME,
                    summary.iter().map(|item| item.max_value).collect(),
                    MAX_SERIES_STROKE,
                    MAX_SERIES_FILL,
                ),
            ],
            tooltips: summary.iter().map(radar_tooltip).collect(),
        };

        Self {
            bar: project(|item| item.count as f64),
            line: project(|item| item.average_value),
            pie: project(|item| item.count as f64),
            doughnut: project(|item| item.distinct_locations as f64),
            polar: project(|item| item.top_location_count as f64),
            radar,
        }
    }
}


/// Hover text shared by every chart for one category.
pub fn summary_tooltip(item: &CategorySummary) -> String {
    format!(
        "Category: {}\nRecords: {}\nAvg value: {}\nLocations: {}\nTop location: {} ({})",
        item.label,
        item.count,
        item.average_value,
        item.distinct_locations,
        item.top_location_name,
        item.top_location_count
    )
}


/// Hover text for radar markers, adding the value range.
pub fn radar_tooltip(item: &CategorySummary) -> String {
    format!(
        "{}\nMin value: {}\nMax value: {}",
        summary_tooltip(item),
        item.min_value,
        item.max_value
    )
}
