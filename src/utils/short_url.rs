//! Short URL prefix derivation from HTTP request headers.
//!
//! The service does not know its public hostname. Unless an operator pins one
//! with `BASE_URL`, the prefix is taken from the `Referer` header, i.e. the page
//! the client sent the request from. That header is client-controlled and is
//! absent on direct API calls, in which case the prefix is empty and the short
//! URL degrades to the bare code.

use axum::http::{HeaderMap, header};

/// Resolves the prefix placed in front of short codes.
///
/// Priority:
/// 1. `base_url`, when configured
/// 2. The `Referer` header
/// 3. Empty string
///
/// A non-empty prefix always ends with exactly one `/`.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::REFERER, "http://localhost:3000/".parse().unwrap());
///
/// assert_eq!(origin_prefix(&headers, None), "http://localhost:3000/");
/// ```
pub fn origin_prefix(headers: &HeaderMap, base_url: Option<&str>) -> String {
    let source = base_url.or_else(|| {
        headers
            .get(header::REFERER)
            .and_then(|v| v.to_str().ok())
    });

    match source.map(str::trim) {
        Some(prefix) if !prefix.is_empty() => {
            format!("{}/", prefix.trim_end_matches('/'))
        }
        _ => String::new(),
    }
}

/// Joins a prefix from [`origin_prefix`] with a short code.
pub fn short_url(prefix: &str, code: &str) -> String {
    format!("{prefix}{code}")
}
