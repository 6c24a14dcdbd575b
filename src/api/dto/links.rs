//! DTOs for the link listing endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One entry of `GET /links`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkItem {
    pub short_url: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}
