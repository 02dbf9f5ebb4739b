//! Blog post handlers.

use actix_web::{HttpResponse, http::header, web};
use uuid::Uuid;

use quill_core::domain::{Author, BlogPost, BlogPostPatch, NewBlogPost};
use quill_core::{DomainError, RepoError};
use quill_shared::dto::{AuthorPayload, BlogPostResponse, CreatePostRequest, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: &BlogPost) -> BlogPostResponse {
    BlogPostResponse {
        id: post.id.to_string(),
        author: post.author.display_name(),
        title: post.title.clone(),
        content: post.content.clone(),
        created: post.created.to_rfc3339(),
    }
}

fn to_author(payload: AuthorPayload) -> Author {
    Author::new(
        payload.first_name.unwrap_or_default(),
        payload.last_name.unwrap_or_default(),
    )
}

/// Path ids that are not UUIDs cannot name a stored post.
fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<BlogPostResponse> = posts.iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let raw_id = path.into_inner();

    let post = match parse_id(&raw_id) {
        Some(id) => state.posts.find_by_id(id).await?,
        None => None,
    }
    .ok_or_else(|| DomainError::post_not_found(&raw_id))?;

    Ok(HttpResponse::Ok().json(to_response(&post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let draft = NewBlogPost::new(
        to_author(req.author.unwrap_or_default()),
        req.title.unwrap_or_default(),
        req.content.unwrap_or_default(),
    );
    draft.validate()?;

    let post = state.posts.insert(draft).await?;
    tracing::info!(post_id = %post.id, "Blog post created");

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/posts/{}", post.id)))
        .json(to_response(&post)))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let raw_id = path.into_inner();
    let req = body.into_inner();

    if let Some(body_id) = req.id.as_deref() {
        if body_id != raw_id {
            return Err(DomainError::Validation(vec![format!(
                "request path id ({}) and request body id ({}) must match",
                raw_id, body_id
            )])
            .into());
        }
    }

    let patch = BlogPostPatch {
        author: req.author.map(to_author),
        title: req.title,
        content: req.content,
    };
    patch.validate()?;

    let id = parse_id(&raw_id).ok_or_else(|| DomainError::post_not_found(&raw_id))?;

    state
        .posts
        .update_by_id(id, patch)
        .await
        .map_err(|e| match e {
            RepoError::NotFound => AppError::from(DomainError::post_not_found(&raw_id)),
            other => other.into(),
        })?;
    tracing::info!(post_id = %id, "Blog post updated");

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
///
/// Deleting a post that does not exist still succeeds.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let raw_id = path.into_inner();

    let removed = match parse_id(&raw_id) {
        Some(id) => state.posts.delete_by_id(id).await?,
        None => false,
    };

    if removed {
        tracing::info!(post_id = %raw_id, "Blog post deleted");
    } else {
        tracing::debug!(post_id = %raw_id, "Delete requested for a post that does not exist");
    }

    Ok(HttpResponse::NoContent().finish())
}
