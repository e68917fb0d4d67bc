//! Aggregation layer turning raw records into per-category summaries.

mod category_summary;

pub use category_summary::{aggregate, CategorySummary, NO_LOCATION};
