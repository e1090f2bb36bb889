//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use quill_core::domain::{Post, PostChanges, PostWithAuthor, User};
use quill_core::error::RepoError;
use quill_core::ports::{PostRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list_recent(&self) -> Result<Vec<PostWithAuthor>, RepoError> {
        let rows = PostEntity::find()
            .find_also_related(UserEntity)
            .order_by_desc(post::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(post_model, author)| PostWithAuthor {
                post: post_model.into(),
                author_username: author.map(|u| u.username),
            })
            .collect())
    }

    async fn update_content(&self, id: Uuid, changes: PostChanges) -> Result<Post, RepoError> {
        let existing = PostEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
            .ok_or(RepoError::NotFound)?;

        // Only the four mutable columns plus updated_at are touched; the
        // author reference and creation timestamp ride along unchanged.
        let mut active = existing.into_active_model();
        active.title = Set(changes.title);
        active.body = Set(changes.body);
        active.image = Set(changes.image);
        active.category = Set(changes.category.map(|c| c.as_str().to_string()));
        active.updated_at = Set(chrono::Utc::now().into());

        let model = active
            .update(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(model.into())
    }
}
