//! Link creation and retrieval service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use serde_json::json;

/// Attempts made to find a free generated code before giving up.
const MAX_GENERATION_ATTEMPTS: usize = 5;

/// Service for creating and retrieving short links.
///
/// Owns the code generation policy: custom codes are taken verbatim, generated
/// codes are pre-checked against the store and retried on collision. The
/// store's insert remains the final authority on uniqueness.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `long_url` - Redirect target, stored verbatim
    /// - `custom_code` - Optional short code, stored verbatim; empty means absent
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `long_url` is empty.
    ///
    /// Returns [`AppError::Conflict`] if the custom code is taken, or if no free
    /// generated code was found within the attempt budget.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_short_link(
        &self,
        long_url: String,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        if long_url.is_empty() {
            return Err(AppError::bad_request(
                "longUrl is required",
                json!({ "field": "longUrl" }),
            ));
        }

        let link = match custom_code.filter(|c| !c.is_empty()) {
            Some(code) => {
                self.link_repository
                    .insert(NewLink::new(code, long_url))
                    .await?
            }
            None => self.insert_with_generated_code(long_url).await?,
        };

        tracing::info!(code = %link.code, long_url = %link.long_url, "Short link created");

        Ok(link)
    }

    /// Retrieves a link by its short code.
    ///
    /// An unknown code is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_link_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        self.link_repository.find_by_code(code).await
    }

    /// Lists every link, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_all().await
    }

    /// Generates a code, checks it is free and inserts, retrying on collision.
    ///
    /// A collision is either a pre-check hit or a conflict reported by the
    /// insert when another request took the code in between.
    async fn insert_with_generated_code(&self, long_url: String) -> Result<Link, AppError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let code = generate_code()?;

            if self.link_repository.find_by_code(&code).await?.is_some() {
                tracing::warn!(%code, attempt, "Generated code collided, retrying");
                continue;
            }

            match self
                .link_repository
                .insert(NewLink::new(code.clone(), long_url.clone()))
                .await
            {
                Err(AppError::Conflict { .. }) => {
                    tracing::warn!(%code, attempt, "Generated code taken on insert, retrying");
                }
                result => return result,
            }
        }

        Err(AppError::conflict(
            "Failed to generate a unique short code",
            json!({ "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }
}
