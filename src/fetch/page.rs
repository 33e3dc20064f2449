//! Envelope parsing and the generic fetch functions

use crate::error::{Error, Result};
use crate::http::Transport;
use crate::request::RequestDescriptor;
use crate::resource::{ExtendedInfo, Resource};
use crate::types::{JsonObject, JsonValue};
use tracing::debug;

/// A page of typed resources plus the envelope's pagination metadata.
///
/// Every metadata field is optional; the server omits them on some
/// endpoints and absence is tolerated rather than fatal.
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    /// Number of results on this page
    pub page_result_count: Option<u64>,
    /// Total results across all pages
    pub total_result_count: Option<u64>,
    /// Offset of this page
    pub offset: Option<u64>,
    /// API version string
    pub version: Option<String>,
    /// The typed resources of this page
    pub resources: Vec<T>,
}

impl<T> PaginatedResult<T> {
    /// Whether another page is available after this one.
    ///
    /// Defaults to `true` when any metadata component is missing: with
    /// incomplete metadata the SDK assumes there might be more rather than
    /// silently truncating a collection.
    pub fn has_more(&self) -> bool {
        match (self.offset, self.page_result_count, self.total_result_count) {
            (Some(offset), Some(page), Some(total)) => offset + page < total,
            _ => true,
        }
    }
}

/// Execute a paginated request and map the envelope into a typed page.
///
/// The `results` value arrives in two shapes: an array on multi-result
/// pages, and a bare object on single-result detail endpoints that reuse
/// the paginated envelope. Both normalize into the `resources` list; a
/// missing `results` key yields an empty page.
pub async fn fetch_page<T: Resource>(
    transport: &Transport,
    descriptor: &RequestDescriptor,
) -> Result<PaginatedResult<T>> {
    let payload = transport.execute(descriptor).await?;
    let envelope = require_object(payload.as_json())?;

    let resources: Vec<T> = match envelope.get("results") {
        Some(JsonValue::Array(items)) => items
            .iter()
            .filter_map(JsonValue::as_object)
            .map(T::from_json)
            .collect(),
        Some(JsonValue::Object(single)) => vec![T::from_json(single)],
        _ => Vec::new(),
    };

    debug!(
        "fetched page of {} {} resources",
        resources.len(),
        T::KIND.detail_path()
    );

    Ok(PaginatedResult {
        page_result_count: envelope
            .get("number_of_page_results")
            .and_then(JsonValue::as_u64),
        total_result_count: envelope
            .get("number_of_total_results")
            .and_then(JsonValue::as_u64),
        offset: envelope.get("offset").and_then(JsonValue::as_u64),
        version: envelope
            .get("version")
            .and_then(JsonValue::as_str)
            .map(String::from),
        resources,
    })
}

/// Execute a detail request and merge the result into an existing resource.
///
/// The payload must be an object whose `results` key holds an object;
/// anything else is a serialization error and leaves the resource
/// untouched. A resource hydrated twice merges into the same
/// [`ExtendedInfo`] value rather than replacing it.
pub async fn fetch_detail<T: Resource>(
    transport: &Transport,
    descriptor: &RequestDescriptor,
    resource: &mut T,
) -> Result<()> {
    let payload = transport.execute(descriptor).await?;
    let envelope = require_object(payload.as_json())?;

    let results = envelope
        .get("results")
        .and_then(JsonValue::as_object)
        .ok_or_else(|| {
            Error::serialization("detail envelope must carry an object-valued `results` key")
        })?;

    resource.update(results);
    match resource.extended_info_mut() {
        Some(info) => info.update(results),
        slot @ None => *slot = Some(T::ExtendedInfo::from_json(results)),
    }

    Ok(())
}

fn require_object(value: Option<&JsonValue>) -> Result<&JsonObject> {
    value
        .and_then(JsonValue::as_object)
        .ok_or_else(|| Error::serialization("response payload must be a JSON object"))
}
