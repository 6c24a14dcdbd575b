//! Catch-all handler behind the static file service: favicon probes, short
//! code redirects and the SPA entry document.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::path::PathBuf;
use tower::ServiceExt;
use tower_http::services::ServeFile;
use tracing::debug;

use crate::api::resolver::{Resolution, classify};
use crate::error::AppError;
use crate::state::AppState;

/// Handles every request not claimed by an API route or a static file.
///
/// # Request Flow
///
/// 1. `GET /` → the SPA `index.html`, 200
/// 2. `GET /favicon.ico` → 204 No Content, store untouched
/// 3. `GET /{code}` → 302 Found to the long URL when the code is known
/// 4. `GET /{code}` with an unknown code → the SPA `index.html`, 200
///
/// # Errors
///
/// Returns 404 Not Found when nothing matches (other methods, multi-segment
/// paths that are not assets).
/// Returns 500 Internal Server Error on store failure.
pub async fn resolve_handler(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_owned();

    match classify(request.method(), &path) {
        Resolution::Index => Ok(serve_file(state.index_document(), request).await),
        Resolution::Favicon => Ok(StatusCode::NO_CONTENT.into_response()),
        Resolution::ShortCode(code) => match state.link_service.get_link_by_code(&code).await? {
            Some(link) => {
                debug!(%code, "Redirecting short link");
                found(&link.long_url)
            }
            None => {
                debug!(%code, "Unknown short code, serving SPA document");
                Ok(serve_file(state.index_document(), request).await)
            }
        },
        Resolution::Unmatched => Err(AppError::not_found(
            "Not found",
            json!({ "path": path }),
        )),
    }
}

/// Builds a `302 Found` response to `location`.
///
/// Stored URLs are not validated, so anything outside visible ASCII is
/// percent-encoded first.
fn found(location: &str) -> Result<Response, AppError> {
    let encoded = encode_location(location);
    let value = HeaderValue::from_str(&encoded).map_err(|_| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "location": location }),
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, value)]).into_response())
}

/// Percent-encodes control characters, spaces and non-ASCII characters while
/// leaving URL delimiters and existing escapes alone.
fn encode_location(location: &str) -> String {
    let mut encoded = String::with_capacity(location.len());
    let mut buf = [0u8; 4];

    for ch in location.chars() {
        if ch.is_ascii_graphic() {
            encoded.push(ch);
        } else {
            encoded.push_str(&urlencoding::encode(ch.encode_utf8(&mut buf)));
        }
    }

    encoded
}

async fn serve_file(file: PathBuf, request: Request) -> Response {
    match ServeFile::new(file).oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}
