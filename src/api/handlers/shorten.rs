//! Handler for the link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::short_url::{origin_prefix, short_url};

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "longUrl": "https://example.com",
///   "customCode": "promo"   // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "shortUrl": "http://localhost:3000/promo",
///   "shortCode": "promo"
/// }
/// ```
///
/// # Errors
///
/// - 400 if the body is not JSON or `longUrl` is missing/empty
/// - 409 if the code is already in use
/// - 500 on store failure
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let long_url = payload.long_url.unwrap_or_default();

    let link = state
        .link_service
        .create_short_link(long_url, payload.custom_code)
        .await?;

    let prefix = origin_prefix(&headers, state.base_url.as_deref());

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: short_url(&prefix, &link.code),
            short_code: link.code,
        }),
    ))
}
