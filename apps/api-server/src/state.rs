//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::domain::MutationPolicy;
use quill_core::ports::{FileStore, PostRepository, UserRepository};
use quill_infra::database::DatabaseConnections;
use quill_infra::database::{PostgresPostRepository, PostgresUserRepository};
use quill_infra::files::LocalDiskStore;
use quill_infra::memory::{InMemoryPostRepository, InMemoryUserRepository};

use crate::config::AppConfig;

/// Shared application state. Built once at startup; every handler receives
/// its collaborators through here instead of reaching for globals.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub files: Arc<dyn FileStore>,
    pub mutation_policy: MutationPolicy,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let (users, posts): (Arc<dyn UserRepository>, Arc<dyn PostRepository>) =
            match &config.database {
                Some(db_config) => match DatabaseConnections::init(db_config).await {
                    Ok(connections) => {
                        let conn = Arc::new(connections.main);
                        let users: Arc<dyn UserRepository> =
                            Arc::new(PostgresUserRepository::new(conn.clone()));
                        let posts: Arc<dyn PostRepository> =
                            Arc::new(PostgresPostRepository::new(conn));
                        (users, posts)
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        Self::in_memory_repos()
                    }
                },
                None => {
                    tracing::warn!(
                        "DATABASE_URL not set. Running without database (in-memory mode)."
                    );
                    Self::in_memory_repos()
                }
            };

        let files: Arc<dyn FileStore> =
            Arc::new(LocalDiskStore::new(config.upload_dir.clone(), "/uploads"));

        tracing::info!(policy = ?config.mutation_policy, "Application state initialized");

        Self {
            users,
            posts,
            files,
            mutation_policy: config.mutation_policy,
        }
    }

    fn in_memory_repos() -> (Arc<dyn UserRepository>, Arc<dyn PostRepository>) {
        let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let posts: Arc<dyn PostRepository> = Arc::new(InMemoryPostRepository::new(users.clone()));
        (users, posts)
    }
}
