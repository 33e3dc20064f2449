//! HTTP transport
//!
//! Executes built [`crate::request::RequestDescriptor`]s over reqwest and
//! classifies the raw outcome. No retry logic lives here; callers decide
//! whether to retry.

mod transport;


pub use transport::{Payload, Transport};
