use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use crate::error::RepoError;

/// Generic repository trait defining the entity-agnostic store operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID. Returns whether anything was removed.
    async fn delete_by_id(&self, id: ID) -> Result<bool, RepoError>;

    /// Number of stored entities.
    async fn count(&self) -> Result<u64, RepoError>;

    /// Remove every entity, returning how many were removed.
    async fn clear(&self) -> Result<u64, RepoError>;
}

/// Blog post store - the document collection behind the service.
#[async_trait]
pub trait BlogPostStore: BaseRepository<BlogPost, Uuid> {
    /// Persist a new post. The store assigns `id` and `created`.
    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError>;

    /// All posts, oldest first (ties broken by id).
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Overwrite the supplied fields of an existing post.
    ///
    /// Fails with [`RepoError::NotFound`] when no post has this id.
    async fn update_by_id(&self, id: Uuid, patch: BlogPostPatch) -> Result<BlogPost, RepoError>;

    /// Release the underlying connection, if any.
    async fn close(&self) -> Result<(), RepoError> {
        Ok(())
    }
}
