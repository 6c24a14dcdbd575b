//! HTTP layer: request/response handling.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing and CORS layers
//! - [`resolver`] - Precedence rules for non-API requests
//! - [`routes`] - Fixed API routes

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod resolver;
pub mod routes;
