//! Loading chart payloads from files, stdin or the API.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;

use crate::models::ChartPayload;


/// Read a `{categories, records}` payload from a JSON file.
pub fn read_payload_file(path: &Path) -> Result<ChartPayload> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read payload file: {}", path.display()))?;

    ChartPayload::from_json_str(&content)
        .with_context(|| format!("Payload file is not valid JSON: {}", path.display()))
}


/// Read a payload from stdin. Unreadable or non-JSON input yields no payload.
pub async fn read_stdin_payload() -> Option<ChartPayload> {
    let mut content = String::new();
    if let Err(e) = tokio::io::stdin().read_to_string(&mut content).await {
        log::warn!("Failed to read payload from stdin: {e}");
        return None;
    }

    match ChartPayload::from_json_str(&content) {
        Ok(payload) => Some(payload),
        Err(e) => {
            log::warn!("Ignoring stdin payload that is not valid JSON: {e}");
            None
        }
    }
}


/// Current-thread runtime driving one command.
pub fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}
