//! HTTP request handlers.
//!
//! Each handler module corresponds to one request class.

pub mod links;
pub mod redirect;
pub mod shorten;

pub use links::list_links_handler;
pub use redirect::resolve_handler;
pub use shorten::shorten_handler;
