use crate::models::{JobPosting, Provider};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the catalog API
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Client for the marketplace catalog API
///
/// The catalog owns all persistence; this service only asks it for
/// coarse-filtered candidate pools:
/// - providers offering a given service category
/// - job postings, by id or the whole pool
pub struct CatalogClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl CatalogClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            client,
        }
    }

    /// Fetch providers offering the given service category.
    ///
    /// Records that fail to parse are skipped, never fatal; a partially
    /// malformed catalog page still yields whatever candidates it can.
    pub async fn fetch_providers(&self, service_name: &str) -> Result<Vec<Provider>, CatalogError> {
        let url = format!(
            "{}/providers?service={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(service_name)
        );

        tracing::debug!("Fetching providers from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CatalogError::ApiError(format!(
                "Failed to fetch providers: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;
        let documents = json
            .get("providers")
            .and_then(|d| d.as_array())
            .ok_or_else(|| CatalogError::InvalidResponse("Missing providers array".into()))?;

        let providers: Vec<Provider> = documents
            .iter()
            .filter_map(|doc| serde_json::from_value(doc.clone()).ok())
            .collect();

        tracing::debug!(
            "Parsed {} of {} provider records",
            providers.len(),
            documents.len()
        );

        Ok(providers)
    }

    /// Fetch specific postings by id. Unknown ids are simply absent from
    /// the result; the caller decides whether that matters.
    pub async fn fetch_postings_by_ids(
        &self,
        ids: &[String],
    ) -> Result<Vec<JobPosting>, CatalogError> {
        let joined = ids.join(",");
        let url = format!(
            "{}/postings?ids={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&joined)
        );

        let postings = self.fetch_posting_page(&url).await?;
        if postings.is_empty() && !ids.is_empty() {
            return Err(CatalogError::NotFound(format!(
                "No postings found for ids: {}",
                joined
            )));
        }

        Ok(postings)
    }

    /// Fetch the full posting pool for similarity ranking.
    pub async fn fetch_all_postings(&self) -> Result<Vec<JobPosting>, CatalogError> {
        let url = format!("{}/postings", self.base_url.trim_end_matches('/'));
        self.fetch_posting_page(&url).await
    }

    async fn fetch_posting_page(&self, url: &str) -> Result<Vec<JobPosting>, CatalogError> {
        tracing::debug!("Fetching postings from: {}", url);

        let response = self
            .client
            .get(url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CatalogError::ApiError(format!(
                "Failed to fetch postings: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;
        let documents = json
            .get("postings")
            .and_then(|d| d.as_array())
            .ok_or_else(|| CatalogError::InvalidResponse("Missing postings array".into()))?;

        Ok(documents
            .iter()
            .filter_map(|doc| serde_json::from_value(doc.clone()).ok())
            .collect())
    }

    /// Lightweight reachability probe for the health endpoint.
    pub async fn health_check(&self) -> Result<bool, CatalogError> {
        let url = format!("{}/status", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;
        Ok(response.status().is_success())
    }
}
