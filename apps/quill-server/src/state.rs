//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::RepoError;
use quill_core::ports::BlogPostStore;
use quill_infra::{DatabaseConfig, InMemoryBlogPostStore};

#[cfg(feature = "postgres")]
use quill_infra::PostgresBlogPostStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn BlogPostStore>,
    /// Name of the backing store, reported by the health endpoint.
    pub store_kind: &'static str,
}

impl AppState {
    pub fn new(posts: Arc<dyn BlogPostStore>, store_kind: &'static str) -> Self {
        Self { posts, store_kind }
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryBlogPostStore::new()), "memory")
    }

    /// Build the application state with the configured store.
    ///
    /// A configured database that cannot be reached, or that this build cannot
    /// talk to, is an error; the in-memory store is only used when no database
    /// is configured.
    pub async fn init(db_config: Option<&DatabaseConfig>) -> Result<Self, RepoError> {
        let state = match db_config {
            #[cfg(feature = "postgres")]
            Some(config) => {
                let conn = quill_infra::database::connect(config)
                    .await
                    .map_err(|e| RepoError::Connection(e.to_string()))?;
                Self::new(Arc::new(PostgresBlogPostStore::new(conn)), "postgres")
            }
            #[cfg(not(feature = "postgres"))]
            Some(_) => {
                return Err(RepoError::Connection(
                    "DATABASE_URL is set but this build has no postgres support".to_string(),
                ));
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        tracing::info!(store = state.store_kind, "Application state initialized");

        Ok(state)
    }
}
