//! Shared application state injected into every handler.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::api::resolver::INDEX_DOCUMENT;
use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteLinkRepository;

/// Per-process state cloned into each request.
///
/// Holds no per-request data; the link store behind `link_service` is the only
/// shared mutable resource.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteLinkRepository>>,
    /// Root of the built frontend.
    pub static_dir: Arc<Path>,
    /// Pinned short URL prefix, see [`crate::utils::short_url::origin_prefix`].
    pub base_url: Option<Arc<str>>,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService<SqliteLinkRepository>>,
        static_dir: impl Into<PathBuf>,
        base_url: Option<String>,
    ) -> Self {
        Self {
            link_service,
            static_dir: Arc::from(static_dir.into()),
            base_url: base_url.map(Arc::from),
        }
    }

    /// Path of the SPA entry document.
    pub fn index_document(&self) -> PathBuf {
        self.static_dir.join(INDEX_DOCUMENT)
    }
}
