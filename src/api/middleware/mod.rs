//! HTTP middleware for request processing.
//!
//! - [`tracing`] - Request spans and response logging
//! - [`cors`] - Cross-origin policy

pub mod cors;
pub mod tracing;
