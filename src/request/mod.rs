//! Pure request construction
//!
//! Building a [`RequestDescriptor`] performs no I/O; the same builder inputs
//! always produce the same descriptor.

mod builder;


pub use builder::{BasePath, RequestBuilder, RequestDescriptor, ResponseFormat};
