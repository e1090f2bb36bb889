//! In-memory repository implementations.
//!
//! Used as the fallback when no database is configured, and as test doubles
//! throughout the suites. Data is lost on process restart.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{Post, PostChanges, PostWithAuthor, User};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository, UserRepository};

/// In-memory user store over an async RwLock.
///
/// The uniqueness check and the insert happen under one write lock, so the
/// store enforces username uniqueness atomically, the same guarantee the
/// unique column provides in Postgres.
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        let mut users = self.users.write().await;

        let taken = users
            .values()
            .any(|existing| existing.username == user.username && existing.id != user.id);
        if taken {
            return Err(RepoError::Constraint("Username already in use".to_string()));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut users = self.users.write().await;
        users.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }
}

/// In-memory post store. Resolves author usernames through the user
/// repository, mirroring the join the Postgres implementation performs.
pub struct InMemoryPostRepository {
    posts: RwLock<HashMap<Uuid, Post>>,
    users: Arc<dyn UserRepository>,
}

impl InMemoryPostRepository {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
            users,
        }
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.get(&id).cloned())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        posts.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_recent(&self) -> Result<Vec<PostWithAuthor>, RepoError> {
        let mut posts: Vec<Post> = {
            let posts = self.posts.read().await;
            posts.values().cloned().collect()
        };
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let mut result = Vec::with_capacity(posts.len());
        for post in posts {
            let author_username = match post.author_id {
                Some(author_id) => self
                    .users
                    .find_by_id(author_id)
                    .await?
                    .map(|u| u.username),
                None => None,
            };
            result.push(PostWithAuthor {
                post,
                author_username,
            });
        }
        Ok(result)
    }

    async fn update_content(&self, id: Uuid, changes: PostChanges) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        let post = posts.get_mut(&id).ok_or(RepoError::NotFound)?;

        post.title = changes.title;
        post.body = changes.body;
        post.image = changes.image;
        post.category = changes.category;
        post.updated_at = chrono::Utc::now();

        Ok(post.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use quill_core::domain::{Category, PostDraft};

    fn draft(title: &str) -> PostDraft {
        PostDraft::validate(
            title.to_string(),
            "body text".to_string(),
            "x.jpg".to_string(),
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected_and_not_stored() {
        let repo = InMemoryUserRepository::new();

        repo.save(User::new("alice".to_string(), "h1".to_string()))
            .await
            .unwrap();
        let second = repo
            .save(User::new("alice".to_string(), "h2".to_string()))
            .await;

        assert!(matches!(second, Err(RepoError::Constraint(_))));
        let stored = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(stored.password_hash, "h1");
    }

    #[tokio::test]
    async fn usernames_are_case_sensitive() {
        let repo = InMemoryUserRepository::new();
        repo.save(User::new("alice".to_string(), "h".to_string()))
            .await
            .unwrap();

        assert!(repo.find_by_username("Alice").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_recent_is_newest_first_with_authors_resolved() {
        let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let alice = User::new("alice".to_string(), "h".to_string());
        users.save(alice.clone()).await.unwrap();

        let repo = InMemoryPostRepository::new(users);

        let mut older = Post::new(None, draft("older"));
        older.created_at = older.created_at - TimeDelta::seconds(10);
        repo.save(older).await.unwrap();
        repo.save(Post::new(Some(alice.id), draft("newer")))
            .await
            .unwrap();

        let listed = repo.list_recent().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].post.title, "newer");
        assert_eq!(listed[0].author_username.as_deref(), Some("alice"));
        assert_eq!(listed[1].post.title, "older");
        assert!(listed[1].author_username.is_none());
    }

    #[tokio::test]
    async fn update_preserves_author_and_creation_time() {
        let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let repo = InMemoryPostRepository::new(users);

        let author_id = Uuid::new_v4();
        let post = repo
            .save(Post::new(Some(author_id), draft("before")))
            .await
            .unwrap();

        let updated = repo
            .update_content(
                post.id,
                PostChanges {
                    title: "after".to_string(),
                    body: "new body".to_string(),
                    image: "y.jpg".to_string(),
                    category: Some(Category::Travel),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "after");
        assert_eq!(updated.author_id, Some(author_id));
        assert_eq!(updated.created_at, post.created_at);
        assert!(updated.updated_at >= post.updated_at);
    }

    #[tokio::test]
    async fn update_and_delete_on_missing_id_fail_without_side_effects() {
        let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let repo = InMemoryPostRepository::new(users);

        let changes = PostChanges {
            title: "T".to_string(),
            body: "b".to_string(),
            image: "x.jpg".to_string(),
            category: None,
        };
        let update = repo.update_content(Uuid::new_v4(), changes).await;
        assert!(matches!(update, Err(RepoError::NotFound)));

        let delete = repo.delete(Uuid::new_v4()).await;
        assert!(matches!(delete, Err(RepoError::NotFound)));

        assert!(repo.list_recent().await.unwrap().is_empty());
    }
}
