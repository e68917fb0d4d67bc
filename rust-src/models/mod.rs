//! Wire models for the chart data supplied by the records API.

mod category;
mod payload;
mod record;

pub use category::Category;
pub use payload::{categories_from_value, records_from_value, ChartPayload};
pub use record::Record;
