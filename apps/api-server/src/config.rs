//! Application configuration loaded from environment variables.

use std::env;

use quill_core::domain::MutationPolicy;
use quill_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    /// Where the local-disk file store writes uploads.
    pub upload_dir: String,
    /// Whether only a post's author may update or delete it. Defaults to
    /// permissive, which is the behavior this API has always had.
    pub mutation_policy: MutationPolicy,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        let mutation_policy = match env::var("OWNER_ONLY_MUTATION").ok().as_deref() {
            Some("true") | Some("1") => MutationPolicy::OwnerOnly,
            _ => MutationPolicy::AnyAuthenticated,
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()),
            mutation_policy,
        }
    }
}
