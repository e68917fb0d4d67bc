//! Per-category summary statistics.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Serialize;

use crate::models::{Category, Record};


/// Top-location name reported when a category has no locations.
pub const NO_LOCATION: &str = "N/A";


/// Summary statistics for a single category.
///
/// Rebuilt from scratch on every render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub id: i64,
    pub label: String,
    pub count: usize,
    /// Mean of finite values, rounded to one decimal; 0 when there are none.
    pub average_value: f64,
    /// Smallest finite value; 0 when there are none.
    pub min_value: f64,
    /// Largest finite value; 0 when there are none.
    pub max_value: f64,
    pub distinct_locations: usize,
    pub top_location_name: String,
    pub top_location_count: usize,
}


/// Running totals for one category during the record pass.
#[derive(Debug, Default)]
struct Accumulator {
    count: usize,
    value_sum: f64,
    value_count: usize,
    min_value: Option<f64>,
    max_value: Option<f64>,
    // Insertion order follows record order, which makes tie-breaks deterministic.
    locations: IndexMap<String, usize>,
}


impl Accumulator {
    fn add(&mut self, record: &Record) {
        self.count += 1;

        if let Some(value) = record.finite_value() {
            self.value_sum += value;
            self.value_count += 1;
            self.min_value = Some(self.min_value.map_or(value, |min| min.min(value)));
            self.max_value = Some(self.max_value.map_or(value, |max| max.max(value)));
        }

        if let Some(location) = record.trimmed_location() {
            *self.locations.entry(location.to_string()).or_insert(0) += 1;
        }
    }

    fn finish(self, category: &Category) -> CategorySummary {
        let average_value = if self.value_count > 0 {
            round_one_decimal(self.value_sum / self.value_count as f64)
        } else {
            0.0
        };

        let mut top_location_name: &str = NO_LOCATION;
        let mut top_location_count = 0;
        for (name, &count) in &self.locations {
            if count > top_location_count {
                top_location_name = name.as_str();
                top_location_count = count;
            }
        }

        CategorySummary {
            id: category.id,
            label: category.name.clone(),
            count: self.count,
            average_value,
            min_value: self.min_value.unwrap_or(0.0),
            max_value: self.max_value.unwrap_or(0.0),
            distinct_locations: self.locations.len(),
            top_location_name: top_location_name.to_string(),
            top_location_count,
        }
    }
}


/// Aggregate records into one summary per category, in category order.
///
/// Records whose category id is missing or unknown are skipped.
pub fn aggregate(categories: &[Category], records: &[Record]) -> Vec<CategorySummary> {
    let positions: HashMap<i64, usize> = categories
        .iter()
        .enumerate()
        .map(|(position, category)| (category.id, position))
        .collect();

    let mut accumulators: Vec<Accumulator> = categories.iter().map(|_| Accumulator::default()).collect();

    for record in records {
        let Some(position) = record.category_id.and_then(|id| positions.get(&id)) else {
            continue;
        };
        accumulators[*position].add(record);
    }

    accumulators
        .into_iter()
        .zip(categories)
        .map(|(acc, category)| acc.finish(category))
        .collect()
}


/// Round to one decimal against the exact binary value, so `0.15` (stored just
/// below) rounds down. Exact halves such as `0.25` round away from zero.
fn round_one_decimal(value: f64) -> f64 {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && (value * 10.0).fract().abs() == 0.5 {
        return (value * 10.0).round() / 10.0;
    }
    format!("{value:.1}").parse().unwrap_or(value)
}
