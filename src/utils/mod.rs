//! Utility functions used across the application.
//!
//! - [`code_generator`] - Random short code generation
//! - [`short_url`] - Short URL prefix derivation from request headers

pub mod code_generator;
pub mod short_url;
