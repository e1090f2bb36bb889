use uuid::Uuid;

use super::Post;

/// Who may update or delete an existing post.
///
/// The permissive variant matches the behavior this API has always shipped
/// with: any authenticated user may mutate any post. `OwnerOnly` restricts
/// mutation to the recorded author and is opt-in via configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationPolicy {
    #[default]
    AnyAuthenticated,
    OwnerOnly,
}

impl MutationPolicy {
    /// Whether `caller` may mutate `post`. Posts with no recorded author
    /// remain mutable by any authenticated caller under either policy.
    pub fn allows(&self, caller: Uuid, post: &Post) -> bool {
        match self {
            Self::AnyAuthenticated => true,
            Self::OwnerOnly => match post.author_id {
                Some(author) => author == caller,
                None => true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostDraft;

    fn post_by(author_id: Option<Uuid>) -> Post {
        let draft = PostDraft::validate(
            "T".to_string(),
            "body".to_string(),
            "x.jpg".to_string(),
            None,
        )
        .unwrap();
        Post::new(author_id, draft)
    }

    #[test]
    fn permissive_policy_allows_anyone() {
        let post = post_by(Some(Uuid::new_v4()));
        assert!(MutationPolicy::AnyAuthenticated.allows(Uuid::new_v4(), &post));
    }

    #[test]
    fn owner_only_rejects_non_authors() {
        let author = Uuid::new_v4();
        let post = post_by(Some(author));
        assert!(MutationPolicy::OwnerOnly.allows(author, &post));
        assert!(!MutationPolicy::OwnerOnly.allows(Uuid::new_v4(), &post));
    }

    #[test]
    fn owner_only_allows_authorless_posts() {
        let post = post_by(None);
        assert!(MutationPolicy::OwnerOnly.allows(Uuid::new_v4(), &post));
    }
}
