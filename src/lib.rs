//! # gamedex
//!
//! Client SDK for a wiki-style video game database REST API.
//!
//! The SDK covers three things:
//!
//! - **Paginated fetch**: generic requests that turn the server's JSON
//!   envelope into strongly-typed pages with pagination metadata.
//! - **Stub-to-full hydration**: a resource built from a partial fragment
//!   (e.g. the game nested inside a character payload) can later be
//!   completed with full detail and relationship data, never losing fields
//!   it already knows.
//! - **Device authorization**: a headless/TV-style flow that fetches a
//!   registration code, polls on a timer, and stores the resulting API key
//!   for every subsequent request.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use gamedex::{Character, Client, ClientConfig, FetchOptions, PaginationSpec};
//!
//! #[tokio::main]
//! async fn main() -> gamedex::Result<()> {
//!     let client = Client::new(ClientConfig::builder().api_key("K").build())?;
//!
//!     let page = client
//!         .fetch_page::<Character>(&FetchOptions::new().pagination(PaginationSpec::new(0, 20)))
//!         .await?;
//!
//!     let mut character = page.resources.into_iter().next().unwrap();
//!     client.hydrate(&mut character, None).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! application code
//!        │
//!        ▼
//! ┌──────────────┐    ┌────────────┐    ┌──────────────────────┐
//! │ Client       │───▶│ Request    │───▶│ Transport            │
//! │ fetch/hydrate│    │ Builder    │    │ classify + api_key   │
//! └──────────────┘    └────────────┘    └──────────────────────┘
//!        │                                        ▲
//!        ▼                                        │
//! ┌──────────────┐                       ┌────────────────────┐
//! │ Resource     │                       │ AuthorizationSess. │
//! │ merge/hydrate│                       │ timer-driven polls │
//! └──────────────┘                       └────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error taxonomy for the SDK
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration and credential store
pub mod config;

/// Pure request construction
pub mod request;

/// HTTP transport
pub mod http;

/// Resource hydration protocol and concrete models
pub mod resource;

/// Paginated and detail fetch
pub mod fetch;

/// Device-authorization state machine
pub mod auth;

/// The constructed SDK client
pub mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::{AuthEvent, AuthorizationHandle, AuthorizationSession};
pub use client::{Client, FetchOptions};
pub use config::{ClientConfig, CredentialStore, RequestApprover};
pub use error::{ApiErrorCode, AuthFailure, Error, Result};
pub use fetch::PaginatedResult;
pub use request::{BasePath, RequestDescriptor, ResponseFormat};
pub use resource::{
    Character, Company, ExtendedInfo, Franchise, Game, Image, Location, Person, Resource,
    ResourceKind,
};
pub use types::{Method, PaginationSpec, SortDirection, SortSpec};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
