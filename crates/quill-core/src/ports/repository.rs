use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostChanges, PostWithAuthor, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist a new entity.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Fails with `RepoError::NotFound` when no
    /// such entity exists.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
///
/// `save` of a user whose username already exists must fail with
/// `RepoError::Constraint`. The storage layer is the authoritative guard;
/// callers may pre-check existence but must not rely on it.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their exact (case-sensitive) username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// All posts ordered by creation time descending (newest first), each
    /// with its author's username resolved when an author is recorded.
    async fn list_recent(&self) -> Result<Vec<PostWithAuthor>, RepoError>;

    /// Replace title/body/image/category of an existing post. The author
    /// reference and creation timestamp are never touched. Fails with
    /// `RepoError::NotFound` when no post with `id` exists.
    async fn update_content(&self, id: Uuid, changes: PostChanges) -> Result<Post, RepoError>;
}
