//! Common types used throughout the gamedex SDK
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP method supported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    GET,
    POST,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
            Method::POST => reqwest::Method::POST,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::GET => write!(f, "GET"),
            Method::POST => write!(f, "POST"),
        }
    }
}

// ============================================================================
// Pagination
// ============================================================================

/// Offset/limit window for a paginated request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationSpec {
    /// Number of records to skip
    pub offset: u32,
    /// Page size, always at least 1
    pub limit: u32,
}

impl PaginationSpec {
    /// Create a pagination spec; a zero limit is clamped to 1
    pub fn new(offset: u32, limit: u32) -> Self {
        Self {
            offset,
            limit: limit.max(1),
        }
    }

    /// The window for the page following this one
    pub fn next_page(self) -> Self {
        Self {
            offset: self.offset + self.limit,
            limit: self.limit,
        }
    }
}

impl Default for PaginationSpec {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 20,
        }
    }
}

// ============================================================================
// Sorting
// ============================================================================

/// Sort direction for a paginated request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The wire token for this direction
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// A sort request, rendered on the wire as `"field:asc"` / `"field:desc"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// Field to sort by
    pub field: String,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortSpec {
    /// Create a sort spec
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Sort ascending on a field
    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    /// Sort descending on a field
    pub fn descending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Descending)
    }

    /// Render the query-parameter value
    pub fn render(&self) -> String {
        format!("{}:{}", self.field, self.direction.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_spec_clamps_zero_limit() {
        let spec = PaginationSpec::new(10, 0);
        assert_eq!(spec.limit, 1);
        assert_eq!(spec.offset, 10);
    }

    #[test]
    fn test_pagination_spec_next_page() {
        let spec = PaginationSpec::new(20, 25);
        let next = spec.next_page();
        assert_eq!(next.offset, 45);
        assert_eq!(next.limit, 25);
    }

    #[test]
    fn test_sort_spec_render() {
        assert_eq!(SortSpec::ascending("name").render(), "name:asc");
        assert_eq!(
            SortSpec::descending("date_added").render(),
            "date_added:desc"
        );
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::GET.to_string(), "GET");
        assert_eq!(Method::POST.to_string(), "POST");
    }
}
