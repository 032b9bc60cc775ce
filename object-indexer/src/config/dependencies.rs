//! Dependency initialization and wiring for the object indexer.

use std::env;
use std::sync::Arc;
use tracing::info;

use crate::IndexingError;
use object_indexer_pipeline::{
    fetcher::ContentFetcher, orchestrator::BatchOrchestrator, processor::DocumentBuilder,
    synchronizer::IndexSynchronizer,
};
use object_indexer_repository::{
    config::{ObjectStoreConfig, SearchAppConfig},
    OssObjectStore, SearchAppClient,
};

/// Default object store endpoint.
const DEFAULT_OSS_ENDPOINT: &str = "oss-cn-hangzhou.aliyuncs.com";

/// Default search application host.
const DEFAULT_SEARCH_APP_HOST: &str = "http://opensearch-cn-hangzhou.aliyuncs.com";

/// Default search application identifier.
const DEFAULT_SEARCH_APP_NAME: &str = "object-search";

/// Default search table identifier.
const DEFAULT_SEARCH_TABLE_NAME: &str = "documents";

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured orchestrator ready to run.
    pub orchestrator: BatchOrchestrator,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OSS_ENDPOINT`: endpoint objects are fetched from
    ///   (default: oss-cn-hangzhou.aliyuncs.com)
    /// - `OSS_DISPLAY_ENDPOINT`: endpoint used in document subject URLs
    ///   (default: the value of `OSS_ENDPOINT`)
    /// - `OSS_SECURITY_TOKEN`: optional security token forwarded with fetches
    /// - `SEARCH_APP_HOST`: search application host
    ///   (default: http://opensearch-cn-hangzhou.aliyuncs.com)
    /// - `SEARCH_APP_NAME`: search application identifier (default: object-search)
    /// - `SEARCH_TABLE_NAME`: search table identifier (default: documents)
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(IndexingError)` - If initialization fails
    pub fn new() -> Result<Self, IndexingError> {
        let oss_endpoint =
            env::var("OSS_ENDPOINT").unwrap_or_else(|_| DEFAULT_OSS_ENDPOINT.to_string());
        let display_endpoint =
            env::var("OSS_DISPLAY_ENDPOINT").unwrap_or_else(|_| oss_endpoint.clone());
        let search_app_host =
            env::var("SEARCH_APP_HOST").unwrap_or_else(|_| DEFAULT_SEARCH_APP_HOST.to_string());
        let search_app_name =
            env::var("SEARCH_APP_NAME").unwrap_or_else(|_| DEFAULT_SEARCH_APP_NAME.to_string());
        let search_table_name =
            env::var("SEARCH_TABLE_NAME").unwrap_or_else(|_| DEFAULT_SEARCH_TABLE_NAME.to_string());

        info!(
            oss_endpoint = %oss_endpoint,
            search_app_host = %search_app_host,
            search_app_name = %search_app_name,
            search_table_name = %search_table_name,
            "Initializing dependencies"
        );

        // Initialize object store client
        let mut store_config = ObjectStoreConfig::new(oss_endpoint);
        if let Ok(token) = env::var("OSS_SECURITY_TOKEN") {
            store_config = store_config.with_security_token(token);
        }
        let store = OssObjectStore::new(store_config)?;

        // Initialize search application push client
        let sync_client = SearchAppClient::new(SearchAppConfig::new(search_app_host))?;

        // Assemble the pipeline components
        let fetcher = ContentFetcher::new(Arc::new(store));
        let builder = DocumentBuilder::new(display_endpoint);
        let synchronizer =
            IndexSynchronizer::new(Arc::new(sync_client), search_app_name, search_table_name);

        let orchestrator = BatchOrchestrator::new(fetcher, builder, synchronizer);

        Ok(Self { orchestrator })
    }
}
