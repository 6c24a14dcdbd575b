//! API route configuration.

use crate::api::handlers::{list_links_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    extract::Request,
    response::IntoResponse,
    routing::{get, post},
};
use std::convert::Infallible;
use tower::Service;

/// Fixed-path API routes.
///
/// # Endpoints
///
/// - `GET  /links`   - List all links, newest first
/// - `POST /shorten` - Create a short link
///
/// Other methods on these paths go to `frontend`, the same service that handles
/// every unrouted path, so `GET /shorten` is an ordinary short code lookup and
/// `POST /links` is 404.
pub fn api_routes<T>(frontend: T) -> Router<AppState>
where
    T: Service<Request, Error = Infallible> + Clone + Send + Sync + 'static,
    T::Response: IntoResponse + 'static,
    T::Future: Send + 'static,
{
    Router::new()
        .route(
            "/links",
            get(list_links_handler).fallback_service(frontend.clone()),
        )
        .route("/shorten", post(shorten_handler).fallback_service(frontend))
}
