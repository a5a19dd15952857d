//! HTTP API Client
//!
//! Issues the bare, unauthenticated GETs against the backend and hands the
//! body to [`parse_body`](super::normalize::parse_body).

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use super::error::{FetchError, FetchResult};
use super::normalize::parse_body;
use crate::endpoint::{EndpointResolver, Resource};
use crate::models::FromRecord;

/// Anything that can turn a URL into a normalized record sequence.
///
/// The view state holder only talks to this trait, so pages can be driven by
/// the real HTTP client or by an in-memory source.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_records(&self, url: &str) -> FetchResult<Vec<Value>>;
}

/// Backend client bound to one endpoint resolver
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    resolver: EndpointResolver,
}

impl ApiClient {
    /// Create a client whose requests give up after `timeout`
    pub fn new(resolver: EndpointResolver, timeout: Duration) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, resolver })
    }

    pub fn resolver(&self) -> &EndpointResolver {
        &self.resolver
    }

    /// URL a resource resolves to
    pub fn url_for(&self, resource: Resource) -> String {
        self.resolver.resolve(resource)
    }

    /// Fetch and normalize one resource
    pub async fn fetch(&self, resource: Resource) -> FetchResult<Vec<Value>> {
        self.fetch_records(&self.url_for(resource)).await
    }

    /// Fetch one resource and resolve each record into its typed form
    pub async fn fetch_typed<T: FromRecord>(&self, resource: Resource) -> FetchResult<Vec<T>> {
        let records = self.fetch(resource).await?;
        Ok(records.iter().map(T::from_record).collect())
    }
}

#[async_trait]
impl RecordSource for ApiClient {
    async fn fetch_records(&self, url: &str) -> FetchResult<Vec<Value>> {
        tracing::debug!(url = %url, "Fetching records");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Network(format!("request to {} timed out", url))
            } else {
                FetchError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let records = parse_body(&body)?;
        tracing::debug!(url = %url, count = records.len(), "Fetched records");
        Ok(records)
    }
}
