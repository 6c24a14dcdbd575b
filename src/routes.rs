//! Top-level router configuration.
//!
//! # Precedence
//!
//! Requests are matched in this order, first match wins:
//!
//! 1. `GET  /links`   - Link listing ([`crate::api::routes`])
//! 2. `POST /shorten` - Link creation ([`crate::api::routes`])
//! 3. Static assets   - Exact file matches under the static root ([`ServeDir`])
//! 4. `GET  /{code}`  - Favicon probe (204), redirect (302) or SPA document (200)
//!
//! Steps 1-2 are exact axum routes, which axum always prefers over the
//! fallback. Every other request, including other methods on the API paths,
//! goes to the static file service, which tries step 3 and hands misses to
//! [`resolve_handler`] for step 4.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive cross-origin policy

use crate::api;
use crate::api::handlers::resolve_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::handler::Handler;
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// Unmatched requests go to a [`ServeDir`] over the static root whose fallback
/// is [`resolve_handler`]. Directories are never answered with their
/// `index.html` by the file service, so `/` and directory paths reach the
/// resolver instead of being redirected (a redirect to `dir/` would loop with
/// the trailing-slash trimming in front of the router). Non-read methods are
/// passed on too, so they end in the resolver's 404.
///
/// Trailing-slash normalisation is applied around this router by
/// [`crate::server::run`].
pub fn app_router(state: AppState) -> Router {
    let frontend = ServeDir::new(&*state.static_dir)
        .append_index_html_on_directories(false)
        .call_fallback_on_method_not_allowed(true)
        .fallback(resolve_handler.with_state(state.clone()));

    api::routes::api_routes(frontend.clone())
        .fallback_service(frontend)
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}
