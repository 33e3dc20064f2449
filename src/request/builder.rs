//! Request descriptor and builder

use crate::types::{Method, PaginationSpec, SortSpec};
use std::collections::HashMap;

/// Which configured base URL a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BasePath {
    /// The structured `/api` tree
    #[default]
    Api,
    /// Bespoke feeds served outside the `/api` tree
    Site,
}

/// Response body format requested from the server.
///
/// JSON is the default; XML is selected explicitly by the one request that
/// needs it (the registration-code fetch), never inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Json,
    Xml,
}

impl ResponseFormat {
    /// Value of the `format` query parameter
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

/// Immutable description of an outbound HTTP call.
///
/// Descriptors carry everything the transport needs except the API key,
/// which is appended at dispatch time for `authenticated` requests so that
/// building stays pure and the credential store stays the single source of
/// truth for the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// Base URL selector
    pub base: BasePath,
    /// Path relative to the base, no leading slash
    pub path: String,
    /// HTTP method
    pub method: Method,
    /// Response format
    pub format: ResponseFormat,
    /// Query parameters in insertion order
    pub query: Vec<(String, String)>,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Whether the transport should append the stored API key
    pub authenticated: bool,
}

impl RequestDescriptor {
    /// Start building a descriptor for the given base and path
    pub fn builder(base: BasePath, path: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(base, path)
    }
}

/// Builder for [`RequestDescriptor`]
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base: BasePath,
    path: String,
    method: Method,
    format: ResponseFormat,
    pagination: Option<PaginationSpec>,
    sort: Option<SortSpec>,
    fields: Option<Vec<String>>,
    extra: Vec<(String, String)>,
    authenticated: bool,
}

impl RequestBuilder {
    /// Create a builder for the given base and path
    pub fn new(base: BasePath, path: impl Into<String>) -> Self {
        Self {
            base,
            path: path.into(),
            method: Method::GET,
            format: ResponseFormat::Json,
            pagination: None,
            sort: None,
            fields: None,
            extra: Vec::new(),
            authenticated: true,
        }
    }

    /// Set the HTTP method
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Select the response format explicitly
    #[must_use]
    pub fn format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
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

    /// Restrict the response to the named fields.
    ///
    /// `id` is force-included so every response can be correlated back to a
    /// local object.
    #[must_use]
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Add an endpoint-specific query parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    /// Mark this request as not carrying the API key.
    ///
    /// The registration-code bootstrap request must not send a key it does
    /// not yet have.
    #[must_use]
    pub fn unauthenticated(mut self) -> Self {
        self.authenticated = false;
        self
    }

    /// Build the immutable descriptor
    pub fn build(&self) -> RequestDescriptor {
        let mut query: Vec<(String, String)> = Vec::new();
        query.push(("format".to_string(), self.format.as_str().to_string()));

        if let Some(pagination) = self.pagination {
            query.push(("offset".to_string(), pagination.offset.to_string()));
            query.push(("limit".to_string(), pagination.limit.to_string()));
        }

        if let Some(sort) = &self.sort {
            query.push(("sort".to_string(), sort.render()));
        }

        if let Some(fields) = &self.fields {
            query.push(("field_list".to_string(), render_field_list(fields)));
        }

        for (key, value) in &self.extra {
            query.push((key.clone(), value.clone()));
        }

        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        RequestDescriptor {
            base: self.base,
            path: self.path.clone(),
            method: self.method,
            format: self.format,
            query,
            headers,
            authenticated: self.authenticated,
        }
    }
}

/// Comma-join a field list, force-including `id`
fn render_field_list(fields: &[String]) -> String {
    let mut list = fields.join(",");
    if !fields.iter().any(|f| f == "id") {
        if !list.is_empty() {
            list.push(',');
        }
        list.push_str("id");
    }
    list
}
