//! Domain layer: entities and the storage contract.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on HTTP or on a concrete database. The
//! SQLite implementation lives in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
