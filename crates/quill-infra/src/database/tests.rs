#[cfg(test)]
mod tests {
    use crate::database::entity::{post, user};
    use crate::database::postgres_repo::{PostgresPostRepository, PostgresUserRepository};
    use quill_core::domain::{Post, PostChanges, User};
    use quill_core::error::RepoError;
    use quill_core::ports::{BaseRepository, PostRepository, UserRepository};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use std::sync::Arc;

    fn post_model(title: &str, category: Option<&str>) -> post::Model {
        let now = chrono::Utc::now();
        post::Model {
            id: uuid::Uuid::new_v4(),
            author_id: Some(uuid::Uuid::new_v4()),
            title: title.to_owned(),
            body: "Content".to_owned(),
            image: "x.jpg".to_owned(),
            category: category.map(str::to_owned),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let model = post_model("Test Post", Some("tech"));
        let post_id = model.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db));

        let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

        assert!(result.is_some());
        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, post_id);
        assert_eq!(post.category.unwrap().as_str(), "tech");
    }

    #[tokio::test]
    async fn test_unknown_stored_category_reads_as_absent() {
        // Rows written before the enum was fixed may carry anything.
        let model = post_model("Old Post", Some("gardening"));
        let post_id = model.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db));

        let post: Post = repo.find_by_id(post_id).await.unwrap().unwrap();
        assert!(post.category.is_none());
    }

    #[tokio::test]
    async fn test_find_user_by_username() {
        let now = chrono::Utc::now();
        let user_id = uuid::Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user::Model {
                id: user_id,
                username: "alice".to_owned(),
                password_hash: "$argon2id$...".to_owned(),
                created_at: now.into(),
                updated_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresUserRepository::new(Arc::new(db));

        let result: Option<User> = repo.find_by_username("alice").await.unwrap();

        assert!(result.is_some());
        assert_eq!(result.unwrap().id, user_id);
    }

    #[tokio::test]
    async fn test_update_content_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db));

        let changes = PostChanges {
            title: "T".to_owned(),
            body: "b".to_owned(),
            image: "x.jpg".to_owned(),
            category: None,
        };
        let result = repo.update_content(uuid::Uuid::new_v4(), changes).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db));

        let result =
            BaseRepository::<Post, uuid::Uuid>::delete(&repo, uuid::Uuid::new_v4()).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }
}
