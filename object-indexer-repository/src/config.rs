//! Configuration types for the repository clients.

use std::time::Duration;

/// Configuration for the object store REST client.
#[derive(Debug, Clone)]
pub struct ObjectStoreConfig {
    /// Endpoint objects are fetched from, e.g. `oss-cn-hangzhou.aliyuncs.com`.
    pub endpoint: String,
    /// URL scheme used for fetches.
    pub scheme: String,
    /// Optional security token forwarded with each fetch.
    pub security_token: Option<String>,
    /// Connection timeout for fetch requests.
    pub connect_timeout: Duration,
    /// Overall timeout for fetch requests.
    pub request_timeout: Duration,
}

impl Default for ObjectStoreConfig {
    fn default() -> Self {
        Self {
            endpoint: "oss-cn-hangzhou.aliyuncs.com".to_string(),
            scheme: "http".to_string(),
            security_token: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ObjectStoreConfig {
    /// Create a config for the given endpoint with default timeouts.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Set the security token forwarded with each fetch.
    pub fn with_security_token(mut self, token: impl Into<String>) -> Self {
        self.security_token = Some(token.into());
        self
    }
}

/// Configuration for the search application push client.
#[derive(Debug, Clone)]
pub struct SearchAppConfig {
    /// Base URL of the search application host.
    pub host: String,
    /// Connection timeout for push requests.
    pub connect_timeout: Duration,
    /// Overall timeout for push requests.
    pub request_timeout: Duration,
}

impl Default for SearchAppConfig {
    fn default() -> Self {
        Self {
            host: "http://localhost:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl SearchAppConfig {
    /// Create a config for the given host with default timeouts.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_store_config_defaults() {
        let config = ObjectStoreConfig::new("oss.example.com");
        assert_eq!(config.endpoint, "oss.example.com");
        assert_eq!(config.scheme, "http");
        assert!(config.security_token.is_none());
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_object_store_config_with_token() {
        let config = ObjectStoreConfig::new("oss.example.com").with_security_token("tok");
        assert_eq!(config.security_token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_search_app_config_defaults() {
        let config = SearchAppConfig::new("http://search.example.com");
        assert_eq!(config.host, "http://search.example.com");
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }
}
