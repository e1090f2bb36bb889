//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod files;
mod repository;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use files::{FileStore, FileStoreError};
pub use repository::{BaseRepository, PostRepository, UserRepository};
