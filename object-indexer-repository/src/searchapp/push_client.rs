//! HTTP client for the search application's bulk document endpoint.
//!
//! Staged mutations are pushed as one JSON array and committed server-side
//! as a single operation. The `result` field of the response body carries
//! the raw commit status.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info};
use url::Url;

use crate::config::SearchAppConfig;
use crate::errors::IndexSyncError;
use crate::interfaces::DocumentSyncClient;
use crate::types::{CommitOutcome, StagedMutation};

/// Push client for the search application.
pub struct SearchAppClient {
    client: Client,
    base_url: Url,
}

impl SearchAppClient {
    /// Create a new push client with the given configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(SearchAppClient)` - A new client instance
    /// * `Err(IndexSyncError)` - If the host URL is invalid or the HTTP
    ///   client cannot be built
    pub fn new(config: SearchAppConfig) -> Result<Self, IndexSyncError> {
        let base_url = Url::parse(&config.host)
            .map_err(|e| IndexSyncError::connection(format!("Invalid search app host: {}", e)))?;

        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| IndexSyncError::connection(e.to_string()))?;

        info!(host = %base_url, "Created search app client");

        Ok(Self { client, base_url })
    }

    /// Path of the bulk endpoint for an application table.
    fn bulk_path(app_name: &str, table_name: &str) -> String {
        format!("v3/openapi/apps/{}/{}/actions/bulk", app_name, table_name)
    }

    /// Extract the raw commit status from a push response body.
    ///
    /// The `result` field may come back as a bare string or a JSON boolean;
    /// a missing field reads as an empty status.
    fn raw_status(body: &Value) -> String {
        match body.get("result") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }
}

#[async_trait]
impl DocumentSyncClient for SearchAppClient {
    async fn push_batch(
        &self,
        mutations: &[StagedMutation],
        app_name: &str,
        table_name: &str,
    ) -> Result<CommitOutcome, IndexSyncError> {
        let url = self
            .base_url
            .join(&Self::bulk_path(app_name, table_name))
            .map_err(|e| IndexSyncError::push(e.to_string()))?;

        let response = self
            .client
            .post(url)
            .json(mutations)
            .send()
            .await
            .map_err(|e| IndexSyncError::connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Bulk push request failed");
            return Err(IndexSyncError::push(format!(
                "Push failed with status {}: {}",
                status, body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| IndexSyncError::malformed_response(e.to_string()))?;

        let raw_status = Self::raw_status(&body);

        debug!(
            count = mutations.len(),
            raw_status = %raw_status,
            "Pushed document batch"
        );

        Ok(CommitOutcome::from_raw_status(raw_status))
    }
}
