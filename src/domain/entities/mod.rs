//! Core domain entities.
//!
//! Entities are plain data structures. Creation input is kept in a separate
//! struct ([`NewLink`]) from the persisted record ([`Link`]), which carries the
//! store-assigned id and timestamp.

pub mod link;

pub use link::{Link, NewLink};
