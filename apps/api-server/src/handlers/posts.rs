//! Blog post CRUD handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::{Category, Post, PostChanges, PostDraft, PostWithAuthor};
use quill_core::error::DomainError;
use quill_shared::dto::{PostPayload, PostResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Turn an inbound payload into a validated draft. Unknown categories are a
/// validation failure; an absent category is fine.
fn validate_payload(payload: PostPayload) -> AppResult<PostDraft> {
    let category = payload
        .category
        .as_deref()
        .map(Category::parse)
        .transpose()?;

    Ok(PostDraft::validate(
        payload.title,
        payload.blog,
        payload.img,
        category,
    )?)
}

/// POST /blogs - requires authentication. The new post is owned by the
/// caller; ownership is set here once and never again.
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let draft = validate_payload(body.into_inner())?;

    let post = Post::new(Some(identity.user_id), draft);
    let saved = state.posts.save(post).await?;

    tracing::info!(post_id = %saved.id, author = %identity.username, "Post created");

    Ok(HttpResponse::Created().json(PostResponse::from(PostWithAuthor {
        post: saved,
        author_username: Some(identity.username),
    })))
}

/// GET /blogs - public. Newest first, authors resolved to usernames.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_recent().await?;

    let response: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// PUT /blogs/{id} - requires authentication. Replaces title/body/image/
/// category only; the author reference and creation timestamp are never
/// touched.
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let draft = validate_payload(body.into_inner())?;

    let existing = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "Post",
            id,
        })?;

    if !state.mutation_policy.allows(identity.user_id, &existing) {
        return Err(AppError::Forbidden);
    }

    let updated = state
        .posts
        .update_content(id, PostChanges::from(draft))
        .await?;

    let author_username = match updated.author_id {
        Some(author_id) => state
            .users
            .find_by_id(author_id)
            .await?
            .map(|u| u.username),
        None => None,
    };

    Ok(HttpResponse::Ok().json(PostResponse::from(PostWithAuthor {
        post: updated,
        author_username,
    })))
}

/// DELETE /blogs/{id} - requires authentication.
pub async fn remove(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let existing = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "Post",
            id,
        })?;

    if !state.mutation_policy.allows(identity.user_id, &existing) {
        return Err(AppError::Forbidden);
    }

    state.posts.delete(id).await?;

    tracing::info!(post_id = %id, by = %identity.username, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}
