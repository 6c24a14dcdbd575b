//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// ```json
/// { "longUrl": "https://example.com", "customCode": "promo" }
/// ```
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// Redirect target. Required and non-empty; not checked for URL syntax.
    #[validate(required, length(min = 1))]
    pub long_url: Option<String>,

    /// Optional short code, used verbatim. Empty is treated as absent.
    pub custom_code: Option<String>,
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
    pub short_code: String,
}
