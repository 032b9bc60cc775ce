//! REST client for fetching object content.
//!
//! Objects are addressed virtual-hosted style:
//! `{scheme}://{container}.{endpoint}/{key}`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, info};
use url::Url;

use crate::config::ObjectStoreConfig;
use crate::errors::ObjectStoreError;
use crate::interfaces::ObjectStoreClient;

/// Header carrying the temporary security token for authenticated fetches.
const SECURITY_TOKEN_HEADER: &str = "x-oss-security-token";

/// Object store client backed by the store's REST API.
pub struct OssObjectStore {
    client: Client,
    config: ObjectStoreConfig,
}

impl OssObjectStore {
    /// Create a new object store client with the given configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(OssObjectStore)` - A new client instance
    /// * `Err(ObjectStoreError)` - If the HTTP client cannot be built
    pub fn new(config: ObjectStoreConfig) -> Result<Self, ObjectStoreError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ObjectStoreError::connection(e.to_string()))?;

        info!(endpoint = %config.endpoint, "Created object store client");

        Ok(Self { client, config })
    }

    /// Build the virtual-hosted URL for an object.
    fn object_url(&self, container_name: &str, object_key: &str) -> Result<Url, ObjectStoreError> {
        let raw = format!(
            "{}://{}.{}/{}",
            self.config.scheme, container_name, self.config.endpoint, object_key
        );
        Url::parse(&raw)
            .map_err(|e| ObjectStoreError::request(format!("Invalid object URL {}: {}", raw, e)))
    }
}

#[async_trait]
impl ObjectStoreClient for OssObjectStore {
    async fn get_object(
        &self,
        container_name: &str,
        object_key: &str,
    ) -> Result<String, ObjectStoreError> {
        let url = self.object_url(container_name, object_key)?;

        let mut request = self.client.get(url);
        if let Some(ref token) = self.config.security_token {
            request = request.header(SECURITY_TOKEN_HEADER, token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ObjectStoreError::connection(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ObjectStoreError::not_found(format!(
                "{}/{}",
                container_name, object_key
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ObjectStoreError::request(format!(
                "Get object failed with status {}: {}",
                status, body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ObjectStoreError::read(e.to_string()))?;

        debug!(
            container = %container_name,
            key = %object_key,
            bytes = body.len(),
            "Fetched object content"
        );

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(endpoint: &str) -> OssObjectStore {
        OssObjectStore::new(ObjectStoreConfig::new(endpoint)).unwrap()
    }

    #[test]
    fn test_object_url_is_virtual_hosted() {
        let store = store("oss.example.com");
        let url = store.object_url("docs", "guide.txt").unwrap();
        assert_eq!(url.as_str(), "http://docs.oss.example.com/guide.txt");
    }

    #[test]
    fn test_object_url_keeps_nested_keys() {
        let store = store("oss.example.com");
        let url = store.object_url("docs", "2024/q1/report.txt").unwrap();
        assert_eq!(url.as_str(), "http://docs.oss.example.com/2024/q1/report.txt");
    }
}
