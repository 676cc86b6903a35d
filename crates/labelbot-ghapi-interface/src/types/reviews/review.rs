use serde::{Deserialize, Serialize};

use super::GhReviewStateApi;
use crate::types::common::{GhAuthorAssociation, GhUser};

/// Review (API version)
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct GhReviewApi {
    /// User. Missing for deleted accounts.
    pub user: Option<GhUser>,
    /// State.
    pub state: GhReviewStateApi,
    /// Reviewer association with the repository.
    #[serde(default)]
    pub author_association: GhAuthorAssociation,
}

impl GhReviewApi {
    /// Build a submitted review.
    pub fn new<T: Into<String>>(login: T, state: GhReviewStateApi) -> Self {
        Self {
            user: Some(GhUser::new(login)),
            state,
            author_association: GhAuthorAssociation::None,
        }
    }

    /// Set the reviewer association.
    pub fn with_association(mut self, author_association: GhAuthorAssociation) -> Self {
        self.author_association = author_association;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_reviews() {
        let reviews: Vec<GhReviewApi> = serde_json::from_str(
            r#"[
                {
                    "user": {"login": "alice", "type": "User"},
                    "submitted_at": "2024-03-01T10:00:00Z",
                    "state": "APPROVED",
                    "author_association": "MEMBER"
                },
                {
                    "user": null,
                    "state": "PENDING",
                    "author_association": "NONE"
                }
            ]"#,
        )
        .unwrap();

        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].state, GhReviewStateApi::Approved);
        assert_eq!(reviews[0].author_association, GhAuthorAssociation::Member);
        assert_eq!(reviews[1].user, None);
        assert_eq!(reviews[1].state, GhReviewStateApi::Pending);
    }
}
