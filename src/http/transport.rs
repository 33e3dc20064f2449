//! Transport implementation

use crate::config::{ClientConfig, CredentialStore, RequestApprover};
use crate::error::{ApiErrorCode, Error, Result};
use crate::request::{BasePath, RequestDescriptor, ResponseFormat};
use bytes::Bytes;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Raw success outcome of a transport call
#[derive(Debug, Clone)]
pub enum Payload {
    /// Parsed JSON body (object or array)
    Json(Value),
    /// Raw body bytes, returned for XML-format requests
    Raw(Bytes),
}

impl Payload {
    /// Borrow the JSON value, if this payload is JSON
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Raw(_) => None,
        }
    }
}

/// Executes request descriptors over HTTP.
///
/// One outstanding call per `execute` invocation; the transport never
/// retries on its own.
pub struct Transport {
    client: Client,
    api_base_url: String,
    site_base_url: String,
    credentials: CredentialStore,
    approver: Option<Arc<dyn RequestApprover>>,
}

impl Transport {
    /// Build a transport from client configuration and a credential store
    pub fn new(config: &ClientConfig, credentials: CredentialStore) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(Error::Network)?;

        Ok(Self {
            client,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            site_base_url: config.site_base_url.trim_end_matches('/').to_string(),
            credentials,
            approver: config.approver.clone(),
        })
    }

    /// The credential store shared with this transport
    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// Execute a descriptor and classify the outcome.
    ///
    /// JSON bodies carrying a recognized server-side `status_code` yield
    /// [`Error::Api`] even though the server answered HTTP 200, so the
    /// check runs before the payload is treated as a success.
    pub async fn execute(&self, descriptor: &RequestDescriptor) -> Result<Payload> {
        if let Some(approver) = &self.approver {
            if !approver.approve(descriptor) {
                warn!(
                    "Request vetoed by approval delegate: {} {}",
                    descriptor.method, descriptor.path
                );
                return Err(Error::denied(
                    descriptor.method.to_string(),
                    descriptor.path.clone(),
                ));
            }
        }

        let url = self.build_url(descriptor);
        let mut req = self
            .client
            .request(descriptor.method.into(), &url)
            .query(&descriptor.query);

        for (key, value) in &descriptor.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if descriptor.authenticated {
            let key = self.credentials.api_key().await.ok_or_else(|| {
                Error::config("no API key configured; authenticate or set one explicitly")
            })?;
            req = req.query(&[("api_key", key)]);
        }

        let response = req.send().await.map_err(Error::Network)?;
        let status = response.status();
        let body = response.bytes().await.map_err(Error::Network)?;
        debug!(
            "{} {} -> {} ({} bytes)",
            descriptor.method,
            descriptor.path,
            status.as_u16(),
            body.len()
        );

        match descriptor.format {
            // XML bodies bypass JSON decoding; callers run the minimal
            // tag extractor themselves.
            ResponseFormat::Xml => Ok(Payload::Raw(body)),
            ResponseFormat::Json => {
                let value: Value = serde_json::from_slice(&body)?;

                if let Some(code) = value
                    .get("status_code")
                    .and_then(Value::as_u64)
                    .and_then(ApiErrorCode::from_status_code)
                {
                    return Err(Error::Api(code));
                }

                Ok(Payload::Json(value))
            }
        }
    }

    /// Join the descriptor's path onto its configured base URL
    fn build_url(&self, descriptor: &RequestDescriptor) -> String {
        let base = match descriptor.base {
            BasePath::Api => &self.api_base_url,
            BasePath::Site => &self.site_base_url,
        };
        let path = descriptor.path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("api_base_url", &self.api_base_url)
            .field("site_base_url", &self.site_base_url)
            .field("has_approver", &self.approver.is_some())
            .finish_non_exhaustive()
    }
}
