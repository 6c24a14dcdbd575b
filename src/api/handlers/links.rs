//! Handler for the link listing endpoint.

use axum::{Json, extract::State, http::HeaderMap};

use crate::api::dto::links::LinkItem;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::short_url::{origin_prefix, short_url};

/// Lists every link, newest first.
///
/// # Endpoint
///
/// `GET /links`
///
/// No pagination. `shortUrl` is the request's origin prefix followed by the
/// code; without a `Referer` header (and no `BASE_URL`) it is the bare code.
///
/// # Errors
///
/// Returns 500 on store failure.
pub async fn list_links_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<LinkItem>>, AppError> {
    let links = state.link_service.list_links().await?;
    let prefix = origin_prefix(&headers, state.base_url.as_deref());

    let items = links
        .into_iter()
        .map(|link| LinkItem {
            short_url: short_url(&prefix, &link.code),
            long_url: link.long_url,
            created_at: link.created_at,
        })
        .collect();

    Ok(Json(items))
}
