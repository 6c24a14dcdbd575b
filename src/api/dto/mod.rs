//! Data Transfer Objects for API requests and responses.
//!
//! Field names are camelCase on the wire. Request DTOs derive `validator`
//! rules checked by the handlers.

pub mod links;
pub mod shorten;
