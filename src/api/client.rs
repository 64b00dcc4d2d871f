//! Control-plane API client
//!
//! Sends list requests as JSON-RPC over the HTTP client and plugs into the
//! paginator as its fetch capability.

use super::operation::ListRequest;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::{
    collect_items, pages, Page, PageFetcher, PaginationSummary, Paginator, PaginatorConfig,
};
use crate::types::JsonValue;
use async_trait::async_trait;
use futures::Stream;
use reqwest::Method;
use tracing::debug;

/// Header naming the RPC action
pub const TARGET_HEADER: &str = "X-Rpc-Target";

/// Content type of RPC request bodies
pub const RPC_CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Default action namespace
pub const DEFAULT_TARGET_PREFIX: &str = "ControlPlane_v1";

/// Client for the control-plane list operations
#[derive(Debug)]
pub struct ControlPlaneClient {
    http: HttpClient,
    target_prefix: String,
    paginator: Paginator,
}

impl ControlPlaneClient {
    /// Create a client on top of an existing HTTP client
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            target_prefix: DEFAULT_TARGET_PREFIX.to_string(),
            paginator: Paginator::new(),
        }
    }

    /// Build a client from a validated configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::with_auth(config.http_config(), config.auth.clone())?;
        Ok(Self::new(http)
            .with_target_prefix(config.target_prefix.clone())
            .with_paginator(config.pagination))
    }

    /// Override the action namespace
    #[must_use]
    pub fn with_target_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.target_prefix = prefix.into();
        self
    }

    /// Set pagination behavior for `paginate`, `pages` and `list_all`
    #[must_use]
    pub fn with_paginator(mut self, config: PaginatorConfig) -> Self {
        self.paginator = Paginator::with_config(config);
        self
    }

    /// Get the paginator
    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Get the HTTP client
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Fetch exactly one page. The request is validated before it is sent.
    pub async fn list_page<R: ListRequest>(&self, request: &R) -> Result<Page<String>> {
        request.validate()?;

        let operation = R::OPERATION;
        let body = operation.encode_request(
            serde_json::to_value(request)?,
            request.cursor(),
            request.page_size(),
        )?;

        let target = format!("{}.{}", self.target_prefix, operation.target);
        debug!(target = %target, has_cursor = request.cursor().is_some(), "Sending list request");

        let response: JsonValue = self
            .http
            .request_json(
                Method::POST,
                "/",
                RequestConfig::new()
                    .header(TARGET_HEADER, target)
                    .header("Content-Type", RPC_CONTENT_TYPE)
                    .json(body),
            )
            .await?;

        operation.decode_page(response)
    }

    /// Visit every page of `request`; see [`Paginator::paginate`]
    pub async fn paginate<R, V>(&self, request: R, visitor: V) -> Result<PaginationSummary>
    where
        R: ListRequest,
        V: FnMut(&Page<String>, bool) -> bool,
    {
        self.paginator.paginate(self, request, visitor).await
    }

    /// Lazily stream the pages of `request`
    pub fn pages<R>(&self, request: R) -> impl Stream<Item = Result<Page<String>>> + Send + '_
    where
        R: ListRequest + 'static,
    {
        pages::<R, String, Self>(self, request, *self.paginator.config())
    }

    /// Fetch every page of `request` and return all items in order
    pub async fn list_all<R: ListRequest>(&self, request: R) -> Result<Vec<String>> {
        collect_items::<R, String, Self>(self, request, *self.paginator.config()).await
    }
}

#[async_trait]
impl<R: ListRequest> PageFetcher<R, String> for ControlPlaneClient {
    async fn fetch(&self, query: &R) -> Result<Page<String>> {
        self.list_page(query).await
    }
}
