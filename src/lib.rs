//! # snaplink
//!
//! A small URL shortener that maps short codes to long URLs, stores them in
//! SQLite and serves redirects next to a single-page frontend.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link entity and the storage contract
//! - **Application Layer** ([`application`]) - Creation and lookup rules, code generation policy
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite repository and schema migrations
//! - **API Layer** ([`api`]) - Handlers, DTOs, middleware and request resolution
//!
//! ## HTTP Surface
//!
//! | Method & Path   | Success                                   |
//! |-----------------|-------------------------------------------|
//! | `GET /links`    | 200, all links newest first               |
//! | `POST /shorten` | 201, `{ shortUrl, shortCode }`            |
//! | `GET /{asset}`  | 200, file from the built frontend         |
//! | `GET /{code}`   | 302 to the long URL, or 200 SPA document  |
//!
//! See [`routes`] for the precedence between these.
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://shortlinks.db"   # Optional
//! export STATIC_DIR="dist"                       # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::SqliteLinkRepository;
    pub use crate::state::AppState;
}
