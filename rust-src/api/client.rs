use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::{DataSource, FetchError};
use crate::config::{CATEGORIES_PATH, RECORDS_PATH};
use crate::models::{categories_from_value, records_from_value, Category, Record};


/// Reads `/api/categories` and `/api/records` from a base URL.
#[derive(Debug, Clone)]
pub struct HttpDataSource {
    client: Client,
    base_url: String,
}


impl HttpDataSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json(&self, path: &str) -> Result<Value, FetchError> {
        let url = self.endpoint(path);
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| FetchError::Transport { url: url.clone(), source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status: status.as_u16() });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport { url: url.clone(), source })?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode { url, source })
    }
}


#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError> {
        self.get_json(CATEGORIES_PATH).await.map(categories_from_value)
    }

    async fn fetch_records(&self) -> Result<Vec<Record>, FetchError> {
        self.get_json(RECORDS_PATH).await.map(records_from_value)
    }
}
