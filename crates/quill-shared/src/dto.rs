//! Data Transfer Objects - request/response types for the API.
//!
//! Post field names (`blog`, `img`, `user`) are part of the established wire
//! format and are kept as-is for client compatibility.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quill_core::domain::{Category, PostWithAuthor};

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Plain confirmation message. Registration deliberately echoes nothing
/// about the stored credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response containing a freshly issued session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub expires_in: u64,
}

/// Create/update payload for a post. The category arrives as a raw string so
/// unknown values can be rejected with a validation error instead of a
/// deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPayload {
    pub title: String,
    pub blog: String,
    pub img: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A post's author as exposed publicly. Never carries the credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorResponse {
    pub id: Uuid,
    pub username: String,
}

/// A post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub blog: String,
    pub img: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub user: Option<AuthorResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PostWithAuthor> for PostResponse {
    fn from(entry: PostWithAuthor) -> Self {
        let user = match (entry.post.author_id, entry.author_username) {
            (Some(id), Some(username)) => Some(AuthorResponse { id, username }),
            _ => None,
        };
        Self {
            id: entry.post.id,
            title: entry.post.title,
            blog: entry.post.body,
            img: entry.post.image,
            category: entry.post.category,
            user,
            created_at: entry.post.created_at,
            updated_at: entry.post.updated_at,
        }
    }
}

/// Response for a stored upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub reference: String,
}
