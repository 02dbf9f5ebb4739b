//! In-memory blog post store - used when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::RepoError;
use quill_core::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use quill_core::ports::{BaseRepository, BlogPostStore};

/// In-memory store using a HashMap with async RwLock.
///
/// Writes take the write lock, so each operation is atomic with respect to
/// the others. Data is lost on process restart.
pub struct InMemoryBlogPostStore {
    posts: RwLock<HashMap<Uuid, BlogPost>>,
}

impl InMemoryBlogPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryBlogPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for InMemoryBlogPostStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, RepoError> {
        let mut posts = self.posts.write().await;
        Ok(posts.remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.posts.read().await.len() as u64)
    }

    async fn clear(&self) -> Result<u64, RepoError> {
        let mut posts = self.posts.write().await;
        let removed = posts.len() as u64;
        posts.clear();
        tracing::debug!(removed, "Cleared in-memory blog posts");
        Ok(removed)
    }
}

#[async_trait]
impl BlogPostStore for InMemoryBlogPostStore {
    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError> {
        let post = post.into_post(Uuid::new_v4(), Utc::now());
        let mut posts = self.posts.write().await;
        posts.insert(post.id, post.clone());
        tracing::debug!(post_id = %post.id, "Inserted blog post");
        Ok(post)
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        let mut all: Vec<BlogPost> = posts.values().cloned().collect();
        all.sort_by(|a, b| a.created.cmp(&b.created).then(a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn update_by_id(&self, id: Uuid, patch: BlogPostPatch) -> Result<BlogPost, RepoError> {
        let mut posts = self.posts.write().await;
        let post = posts.get_mut(&id).ok_or(RepoError::NotFound)?;
        patch.apply(post);
        tracing::debug!(post_id = %id, "Updated blog post");
        Ok(post.clone())
    }
}
