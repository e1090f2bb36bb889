//! Domain entities - the core business objects.

mod policy;
mod post;
mod user;

pub use policy::MutationPolicy;
pub use post::{Category, Post, PostChanges, PostDraft, PostWithAuthor};
pub use user::User;
