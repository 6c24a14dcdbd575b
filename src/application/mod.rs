//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers and the admin CLI
//! a single entry point for each operation.
//!
//! - [`services::link_service::LinkService`] - Short link creation and retrieval

pub mod services;
