//! Data supply: the `DataSource` seam and its HTTP implementation.

mod client;
mod error;

pub use client::HttpDataSource;
pub use error::FetchError;

use async_trait::async_trait;

use crate::models::{Category, ChartPayload, Record};


/// Supplier of the category and record lists.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError>;

    async fn fetch_records(&self) -> Result<Vec<Record>, FetchError>;
}


/// Request both lists together. Either failure fails the whole load.
pub async fn load_payload<S>(source: &S) -> Result<ChartPayload, FetchError>
where
    S: DataSource + ?Sized,
{
    let (categories, records) = futures::try_join!(source.fetch_categories(), source.fetch_records())?;
    Ok(ChartPayload::new(categories, records))
}
