//! Classification of requests that reach the catch-all handler.
//!
//! The API endpoints (`GET /links`, `POST /shorten`) are exact axum routes and
//! always win. Everything else is offered to the static file service first
//! (see [`crate::routes`]); only requests naming no file arrive here, where
//! [`classify`] decides between:
//!
//! 1. **Entry document** - `/`, answered with the SPA `index.html`
//! 2. **Favicon probe** - `/favicon.ico`, answered with 204 without touching
//!    the link store
//! 3. **Short code** - any other single path segment
//! 4. **Unmatched** - everything else (multi-segment paths, non-GET methods)

use axum::http::Method;

/// Request path reserved for browser favicon probes.
pub const FAVICON: &str = "favicon.ico";

/// Entry document of the frontend, served for `/` and unknown short codes.
pub const INDEX_DOCUMENT: &str = "index.html";

/// Outcome of classifying a request that matched no static file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Serve the SPA entry document.
    Index,
    /// Answer a favicon probe with an empty 204.
    Favicon,
    /// Look up this (percent-decoded) short code.
    ShortCode(String),
    /// No route matches.
    Unmatched,
}

/// Applies the precedence rules to a request the static service passed on.
pub fn classify(method: &Method, path: &str) -> Resolution {
    if !is_read(method) {
        return Resolution::Unmatched;
    }

    if path == "/" {
        return Resolution::Index;
    }

    let Some(segment) = single_segment(path) else {
        return Resolution::Unmatched;
    };

    if segment == FAVICON {
        return Resolution::Favicon;
    }

    Resolution::ShortCode(segment)
}

fn is_read(method: &Method) -> bool {
    *method == Method::GET || *method == Method::HEAD
}

/// Returns the decoded segment of a one-segment path like `/abc123`.
fn single_segment(path: &str) -> Option<String> {
    let raw = path.strip_prefix('/')?;
    if raw.is_empty() || raw.contains('/') {
        return None;
    }

    let decoded = urlencoding::decode(raw).ok()?;
    Some(decoded.into_owned())
}
