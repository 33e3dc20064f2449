//! Client configuration and shared credential state
//!
//! Configuration is explicit and constructed once per [`crate::Client`];
//! there is no process-wide singleton. The credential store is the single
//! piece of shared mutable state in the SDK: it is written at most once per
//! successful device-authorization flow and read by every authenticated
//! request.

use crate::request::RequestDescriptor;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Default API base URL
pub const DEFAULT_API_BASE_URL: &str = "https://www.gamedex.example/api";

/// Default site base URL (bespoke feeds outside the `/api` tree)
pub const DEFAULT_SITE_BASE_URL: &str = "https://www.gamedex.example";

/// Predicate consulted before any request is dispatched.
///
/// Returning `false` vetoes the request; the transport aborts with
/// [`crate::Error::RequestDenied`] and nothing is sent.
pub trait RequestApprover: Send + Sync {
    /// Decide whether this request may be sent
    fn approve(&self, descriptor: &RequestDescriptor) -> bool;
}

impl<F> RequestApprover for F
where
    F: Fn(&RequestDescriptor) -> bool + Send + Sync,
{
    fn approve(&self, descriptor: &RequestDescriptor) -> bool {
        self(descriptor)
    }
}

/// Configuration for a [`crate::Client`]
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL for the structured `/api` tree
    pub api_base_url: String,
    /// Base URL for bespoke site feeds
    pub site_base_url: String,
    /// API key, if already known; absent keys can be acquired through the
    /// device-authorization flow
    pub api_key: Option<String>,
    /// User agent string
    pub user_agent: String,
    /// Request timeout
    pub timeout: Duration,
    /// Optional veto hook called before every dispatch
    pub approver: Option<Arc<dyn RequestApprover>>,
    /// Device identifier sent with the registration-code request
    pub device_id: Option<String>,
    /// Partner identifier sent with the registration-code request
    pub partner: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            site_base_url: DEFAULT_SITE_BASE_URL.to_string(),
            api_key: None,
            user_agent: format!("gamedex/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(30),
            approver: None,
            device_id: None,
            partner: None,
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_base_url", &self.api_base_url)
            .field("site_base_url", &self.site_base_url)
            .field("has_api_key", &self.api_key.is_some())
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("has_approver", &self.approver.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the API base URL
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_base_url = url.into();
        self
    }

    /// Set the site base URL
    pub fn site_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.site_base_url = url.into();
        self
    }

    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the request approval hook
    pub fn approver(mut self, approver: Arc<dyn RequestApprover>) -> Self {
        self.config.approver = Some(approver);
        self
    }

    /// Set the device identifier for the authorization flow
    pub fn device_id(mut self, id: impl Into<String>) -> Self {
        self.config.device_id = Some(id.into());
        self
    }

    /// Set the partner identifier for the authorization flow
    pub fn partner(mut self, partner: impl Into<String>) -> Self {
        self.config.partner = Some(partner.into());
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// Shared store for the API key.
///
/// Cloning is cheap and clones observe each other's writes. Reads may be
/// concurrent; the device-authorization flow performs at most one write per
/// successful attempt.
#[derive(Clone, Default)]
pub struct CredentialStore {
    api_key: Arc<RwLock<Option<String>>>,
}

impl CredentialStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with an optional key
    pub fn with_key(key: Option<String>) -> Self {
        Self {
            api_key: Arc::new(RwLock::new(key)),
        }
    }

    /// Read the current API key
    pub async fn api_key(&self) -> Option<String> {
        self.api_key.read().await.clone()
    }

    /// Replace the stored API key
    pub async fn set_api_key(&self, key: impl Into<String>) {
        let mut slot = self.api_key.write().await;
        *slot = Some(key.into());
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore").finish_non_exhaustive()
    }
}
