//! FILENAME: app/src/source.rs
//! Record source - fetches flat employee records over HTTP.
//!
//! The endpoint pages with `?take=N&skip=M` and answers
//! `{ "items": [ { "loc_name": "...", "cc_1": 5, ... }, ... ] }`.
//! Fetching walks pages until a short page signals the end. Paging is
//! entirely this module's concern; the engine only ever sees the full
//! record sequence.

use report_engine::{FieldValue, Record};
use serde::Deserialize;
use thiserror::Error;

/// Default page size for the records endpoint.
pub const DEFAULT_PAGE_SIZE: u32 = 5000;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// One page of the records endpoint response.
#[derive(Debug, Deserialize)]
struct RecordPage {
    #[serde(default)]
    items: Vec<serde_json::Map<String, serde_json::Value>>,
}

/// HTTP client for the flat record endpoint.
#[derive(Debug, Clone)]
pub struct RecordSource {
    client: reqwest::Client,
    endpoint: String,
    page_size: u32,
}

impl RecordSource {
    pub fn new(endpoint: impl Into<String>, page_size: u32) -> Self {
        RecordSource {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            page_size: page_size.max(1),
        }
    }

    /// Fetches every record, paging until a short page.
    pub async fn fetch_all(&self) -> Result<Vec<Record>, SourceError> {
        let mut records = Vec::new();
        let mut skip = 0u32;

        loop {
            let page = self.fetch_page(self.page_size, skip).await?;
            let page_len = page.items.len();
            log::debug!("fetched page: skip={} items={}", skip, page_len);

            for object in &page.items {
                records.push(record_from_json(records.len() as u32, object));
            }

            if page_len < self.page_size as usize {
                break;
            }
            skip += self.page_size;
        }

        Ok(records)
    }

    async fn fetch_page(&self, take: u32, skip: u32) -> Result<RecordPage, SourceError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("take", take), ("skip", skip)])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}

/// Converts one JSON row object into an engine record.
///
/// JSON null and nested structures map to `Empty`; the engine's permissive
/// measure coercion takes it from there.
pub fn record_from_json(
    source_row: u32,
    object: &serde_json::Map<String, serde_json::Value>,
) -> Record {
    let mut record = Record::new(source_row);
    for (name, value) in object {
        let field_value = match value {
            serde_json::Value::Null => FieldValue::Empty,
            serde_json::Value::Bool(b) => FieldValue::Boolean(*b),
            serde_json::Value::Number(n) => FieldValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => FieldValue::Text(s.clone()),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => FieldValue::Empty,
        };
        record.set(name.clone(), field_value);
    }
    record
}
