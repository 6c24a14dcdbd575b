//! Cross-origin request policy.

use tower_http::cors::CorsLayer;

/// Allows any origin, method and header.
///
/// The frontend may be served from a dev server on another port, and the API
/// carries no credentials.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
