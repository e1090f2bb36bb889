use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Fixed set of post categories.
///
/// Records written before the category column existed carry no category at
/// all; absence is always valid. Unknown strings on write are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tech,
    Lifestyle,
    Travel,
    Food,
    Other,
}

impl Category {
    /// Parse a stored or submitted category string.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value {
            "tech" => Ok(Self::Tech),
            "lifestyle" => Ok(Self::Lifestyle),
            "travel" => Ok(Self::Travel),
            "food" => Ok(Self::Food),
            "other" => Ok(Self::Other),
            _ => Err(DomainError::Validation(format!(
                "Unknown category: {value}"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tech => "tech",
            Self::Lifestyle => "lifestyle",
            Self::Travel => "travel",
            Self::Food => "food",
            Self::Other => "other",
        }
    }
}

/// Post entity - the core content record, optionally owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    /// Set exactly once at creation from the authenticated caller.
    /// Never reassigned by updates. None for pre-ownership records.
    pub author_id: Option<Uuid>,
    pub title: String,
    pub body: String,
    /// Relative storage path or absolute object-store URL.
    pub image: String,
    pub category: Option<Category>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post from a validated draft, stamped with its author.
    pub fn new(author_id: Option<Uuid>, draft: PostDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            author_id,
            title: draft.title,
            body: draft.body,
            image: draft.image,
            category: draft.category,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The mutable subset of a post, used for creation.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
    pub image: String,
    pub category: Option<Category>,
}

impl PostDraft {
    /// Validate required fields. Trims the body; a body that is empty after
    /// trimming is rejected.
    pub fn validate(
        title: String,
        body: String,
        image: String,
        category: Option<Category>,
    ) -> Result<Self, DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::Validation("Title is required".to_string()));
        }
        let body = body.trim().to_string();
        if body.is_empty() {
            return Err(DomainError::Validation(
                "Blog body must not be empty".to_string(),
            ));
        }
        if image.trim().is_empty() {
            return Err(DomainError::Validation(
                "Image reference is required".to_string(),
            ));
        }
        Ok(Self {
            title,
            body,
            image,
            category,
        })
    }
}

/// The fields an update is allowed to replace. Author and creation timestamp
/// are deliberately absent from this type.
#[derive(Debug, Clone)]
pub struct PostChanges {
    pub title: String,
    pub body: String,
    pub image: String,
    pub category: Option<Category>,
}

impl From<PostDraft> for PostChanges {
    fn from(draft: PostDraft) -> Self {
        Self {
            title: draft.title,
            body: draft.body,
            image: draft.image,
            category: draft.category,
        }
    }
}

/// A post paired with its author's public username, as returned by listings.
/// The credential hash never leaves the repository.
#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author_username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_trims_body() {
        let draft = PostDraft::validate(
            "T".to_string(),
            "  body text  ".to_string(),
            "x.jpg".to_string(),
            None,
        )
        .unwrap();
        assert_eq!(draft.body, "body text");
    }

    #[test]
    fn draft_rejects_whitespace_body() {
        let result = PostDraft::validate(
            "T".to_string(),
            "   \n ".to_string(),
            "x.jpg".to_string(),
            None,
        );
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn draft_rejects_missing_title_and_image() {
        assert!(
            PostDraft::validate("".to_string(), "b".to_string(), "x.jpg".to_string(), None)
                .is_err()
        );
        assert!(
            PostDraft::validate("T".to_string(), "b".to_string(), "".to_string(), None).is_err()
        );
    }

    #[test]
    fn category_parses_known_values_only() {
        assert_eq!(Category::parse("travel").unwrap(), Category::Travel);
        assert!(Category::parse("gardening").is_err());
    }

    #[test]
    fn new_post_carries_author_and_equal_timestamps() {
        let author = Uuid::new_v4();
        let draft = PostDraft::validate(
            "T".to_string(),
            "body".to_string(),
            "x.jpg".to_string(),
            Some(Category::Tech),
        )
        .unwrap();
        let post = Post::new(Some(author), draft);
        assert_eq!(post.author_id, Some(author));
        assert_eq!(post.created_at, post.updated_at);
    }
}
