//! Paginated and detail fetch
//!
//! Turns the server's response envelope into typed pages, and drives the
//! stub-to-full hydration of individual resources.

mod page;

#[cfg(test)]
mod tests;

pub use page::{fetch_detail, fetch_page, PaginatedResult};
