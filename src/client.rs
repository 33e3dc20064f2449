//! The constructed SDK client
//!
//! A [`Client`] is an explicit object configured once and passed to
//! callers. Nothing in the crate is process-global, so multiple clients
//! with different configurations coexist in one process.

use crate::auth::AuthorizationSession;
use crate::config::{ClientConfig, CredentialStore};
use crate::error::{Error, Result};
use crate::fetch::{fetch_detail, fetch_page, PaginatedResult};
use crate::http::Transport;
use crate::request::{BasePath, RequestBuilder, RequestDescriptor};
use crate::resource::Resource;
use crate::types::{PaginationSpec, SortSpec};
use std::sync::Arc;

/// Options for a paginated collection fetch
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Offset/limit window
    pub pagination: Option<PaginationSpec>,
    /// Sort order
    pub sort: Option<SortSpec>,
    /// Field restriction; `id` is always force-included
    pub fields: Option<Vec<String>>,
    /// Raw `filter` expression
    pub filter: Option<String>,
    /// Endpoint-specific extra parameters
    pub extra: Vec<(String, String)>,
}

impl FetchOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pagination window
    #[must_use]
    pub fn pagination(mut self, spec: PaginationSpec) -> Self {
        self.pagination = Some(spec);
        self
    }

    /// Set the sort order
    #[must_use]
    pub fn sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Restrict the response to the named fields
    #[must_use]
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Set a raw filter expression
    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Add an endpoint-specific query parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }
}

/// SDK entry point. Owns one transport and one credential store for its
/// lifetime; cheap to share behind an `Arc` if callers need to.
#[derive(Debug)]
pub struct Client {
    config: ClientConfig,
    transport: Arc<Transport>,
    credentials: CredentialStore,
}

impl Client {
    /// Build a client from configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let credentials = CredentialStore::with_key(config.api_key.clone());
        let transport = Arc::new(Transport::new(&config, credentials.clone())?);
        Ok(Self {
            config,
            transport,
            credentials,
        })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The API key currently in the credential store
    pub async fn api_key(&self) -> Option<String> {
        self.credentials.api_key().await
    }

    /// Fetch a page of a resource collection
    pub async fn fetch_page<T: Resource>(
        &self,
        options: &FetchOptions,
    ) -> Result<PaginatedResult<T>> {
        let descriptor = self.collection_descriptor::<T>(options).build();
        fetch_page(&self.transport, &descriptor).await
    }

    /// Fetch a single resource by id through the detail endpoint
    pub async fn fetch_by_id<T: Resource>(&self, id: u64, fields: Option<&[&str]>) -> Result<T> {
        let descriptor = self.detail_descriptor::<T>(id, fields).build();
        let page: PaginatedResult<T> = fetch_page(&self.transport, &descriptor).await?;
        page.resources
            .into_iter()
            .next()
            .ok_or_else(|| Error::serialization("detail endpoint returned no resource"))
    }

    /// Hydrate an existing resource (stub or previously fetched) with full
    /// detail and extended info, merging into what is already known
    pub async fn hydrate<T: Resource>(
        &self,
        resource: &mut T,
        fields: Option<&[&str]>,
    ) -> Result<()> {
        let id = resource
            .id()
            .ok_or_else(|| Error::config("cannot hydrate a resource without an id"))?;
        let descriptor = self.detail_descriptor::<T>(id, fields).build();
        fetch_detail(&self.transport, &descriptor, resource).await
    }

    /// Start a device-authorization attempt.
    ///
    /// The session shares this client's transport and credential store; a
    /// successful flow makes the acquired key visible to every subsequent
    /// request.
    pub fn device_authorization(&self) -> AuthorizationSession {
        AuthorizationSession::new(
            self.transport.clone(),
            self.config.device_id.clone(),
            self.config.partner.clone(),
        )
    }

    fn collection_descriptor<T: Resource>(&self, options: &FetchOptions) -> RequestBuilder {
        let mut builder = RequestDescriptor::builder(BasePath::Api, T::KIND.collection_path());
        if let Some(pagination) = options.pagination {
            builder = builder.pagination(pagination);
        }
        if let Some(sort) = &options.sort {
            builder = builder.sort(sort.clone());
        }
        if let Some(fields) = &options.fields {
            builder = builder.fields(fields.iter().cloned());
        }
        if let Some(filter) = &options.filter {
            builder = builder.param("filter", filter);
        }
        for (key, value) in &options.extra {
            builder = builder.param(key, value);
        }
        builder
    }

    fn detail_descriptor<T: Resource>(&self, id: u64, fields: Option<&[&str]>) -> RequestBuilder {
        let mut builder = RequestDescriptor::builder(BasePath::Api, T::KIND.detail_path_for(id));
        if let Some(fields) = fields {
            builder = builder.fields(fields.iter().copied());
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::Character;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> Client {
        Client::new(
            ClientConfig::builder()
                .api_base_url(format!("{}/api", server.uri()))
                .api_key("K")
                .build(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_page_builds_expected_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/characters"))
            .and(query_param("offset", "0"))
            .and(query_param("limit", "2"))
            .and(query_param("sort", "name:asc"))
            .and(query_param("field_list", "name,deck,id"))
            .and(query_param("api_key", "K"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "number_of_page_results": 0,
                "number_of_total_results": 0,
                "offset": 0,
                "results": []
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let options = FetchOptions::new()
            .pagination(PaginationSpec::new(0, 2))
            .sort(SortSpec::ascending("name"))
            .fields(["name", "deck"]);
        let page: PaginatedResult<Character> = client.fetch_page(&options).await.unwrap();

        assert!(page.resources.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_by_id_unwraps_single_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/character/3005-7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": {"id": 7, "name": "Found"}
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let character: Character = client.fetch_by_id(7, None).await.unwrap();
        assert_eq!(character.core.name.as_deref(), Some("Found"));
    }

    #[tokio::test]
    async fn test_hydrate_without_id_is_config_error() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        let mut stub = Character::from_json(json!({"name": "No Id"}).as_object().unwrap());
        let err = client.hydrate(&mut stub, None).await.unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[tokio::test]
    async fn test_filter_param_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/characters"))
            .and(query_param("filter", "name:ryu"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let options = FetchOptions::new().filter("name:ryu");
        let page: PaginatedResult<Character> = client.fetch_page(&options).await.unwrap();
        assert!(page.resources.is_empty());
    }
}
