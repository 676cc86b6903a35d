use serde::{Deserialize, Serialize};

use crate::types::common::{GhAuthorAssociation, GhLabel, GhUser};

/// GitHub Pull request.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhPullRequest {
    /// Number.
    pub number: u64,
    /// User.
    pub user: GhUser,
    /// Author association.
    #[serde(default)]
    pub author_association: GhAuthorAssociation,
    /// Labels.
    #[serde(default)]
    pub labels: Vec<GhLabel>,
    /// Draft.
    #[serde(default)]
    pub draft: bool,
}

impl GhPullRequest {
    /// Label names, in tracker order.
    pub fn label_names(&self) -> Vec<String> {
        self.labels.iter().map(|l| l.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn deserialize_pull_request() {
        let pr: GhPullRequest = serde_json::from_str(
            r#"{
                "number": 42,
                "state": "open",
                "title": "Add feature",
                "user": {"login": "octocat", "type": "User"},
                "author_association": "CONTRIBUTOR",
                "created_at": "2024-03-01T10:00:00Z",
                "requested_reviewers": [{"login": "hubot", "type": "User"}],
                "labels": [{"name": "bug", "color": "d73a4a", "description": null}],
                "draft": true
            }"#,
        )
        .unwrap();

        assert_eq!(pr.number, 42);
        assert!(pr.draft);
        assert_eq!(pr.author_association, GhAuthorAssociation::Contributor);
        assert_eq!(pr.label_names(), vec!["bug".to_string()]);
        assert_eq!(pr.user, GhUser::new("octocat"));
    }

    #[test]
    fn deserialize_minimal_pull_request() {
        let pr: GhPullRequest =
            serde_json::from_str(r#"{"number": 7, "user": {"login": "octocat"}}"#).unwrap();

        assert_eq!(
            pr,
            GhPullRequest {
                number: 7,
                user: GhUser::new("octocat"),
                ..Default::default()
            }
        );
    }
}
