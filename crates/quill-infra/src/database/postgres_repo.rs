//! PostgreSQL blog post store.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, IntoActiveModel, QueryOrder};
use uuid::Uuid;

use quill_core::RepoError;
use quill_core::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use quill_core::ports::BlogPostStore;

use super::entity::blog_post::{self, Entity as BlogPostEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL blog post store.
pub type PostgresBlogPostStore = PostgresBaseRepository<BlogPostEntity>;

fn query_error(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl BlogPostStore for PostgresBlogPostStore {
    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError> {
        let post = post.into_post(Uuid::new_v4(), Utc::now());
        tracing::debug!(post_id = %post.id, "Inserting blog post");

        let active: blog_post::ActiveModel = post.into();
        let model = active.insert(&self.db).await.map_err(query_error)?;

        Ok(model.into())
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let result = BlogPostEntity::find()
            .order_by_asc(blog_post::Column::Created)
            .order_by_asc(blog_post::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update_by_id(&self, id: Uuid, patch: BlogPostPatch) -> Result<BlogPost, RepoError> {
        tracing::debug!(post_id = %id, "Updating blog post");

        let model = BlogPostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_error)?
            .ok_or(RepoError::NotFound)?;

        if patch.is_empty() {
            return Ok(model.into());
        }

        let mut active = model.into_active_model();
        active.apply_patch(patch);

        // The row may have been deleted between the lookup and the update.
        let updated = active.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => RepoError::NotFound,
            other => query_error(other),
        })?;

        Ok(updated.into())
    }

    async fn close(&self) -> Result<(), RepoError> {
        self.db
            .close_by_ref()
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;
        tracing::info!("Database connection closed");
        Ok(())
    }
}
