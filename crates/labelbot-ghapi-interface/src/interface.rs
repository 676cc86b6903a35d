use async_trait::async_trait;

use crate::{
    types::{GhPullRequest, GhReviewApi},
    Result,
};

/// GitHub API Adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Get a pull request from its number.
    async fn pulls_get(&self, owner: &str, name: &str, issue_number: u64) -> Result<GhPullRequest>;
    /// List reviews from a pull request, oldest first.
    async fn pull_reviews_list(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<Vec<GhReviewApi>>;
    /// List user logins of reviewers requested on a pull request.
    async fn pull_reviewer_requests_list(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<Vec<String>>;
    /// Replace all labels for a target issue.
    async fn issue_labels_replace_all(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        labels: &[String],
    ) -> Result<()>;
    /// Add assignees to a target issue. Existing assignees are kept.
    async fn issue_assignees_add(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        assignees: &[String],
    ) -> Result<()>;
}
