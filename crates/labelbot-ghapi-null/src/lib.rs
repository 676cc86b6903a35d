//! Null driver for GH API.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use labelbot_ghapi_interface::{
    types::{GhPullRequest, GhReviewApi, GhUser},
    ApiService, Result,
};
use tracing::info;

/// Null API service.
///
/// Every pull request is an open, ready-for-review pull request without
/// labels nor reviews; writes are discarded.
#[derive(Clone, Default)]
pub struct NullApiService {
    _private: (),
}

impl NullApiService {
    /// Build a null API service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl ApiService for NullApiService {
    #[tracing::instrument(skip(self))]
    async fn pulls_get(&self, owner: &str, name: &str, number: u64) -> Result<GhPullRequest> {
        Ok(GhPullRequest {
            number,
            user: GhUser::new(owner),
            ..Default::default()
        })
    }

    #[tracing::instrument(skip(self), ret)]
    async fn pull_reviews_list(
        &self,
        owner: &str,
        name: &str,
        _issue_number: u64,
    ) -> Result<Vec<GhReviewApi>> {
        Ok(vec![])
    }

    #[tracing::instrument(skip(self), ret)]
    async fn pull_reviewer_requests_list(
        &self,
        owner: &str,
        name: &str,
        _issue_number: u64,
    ) -> Result<Vec<String>> {
        Ok(vec![])
    }

    #[tracing::instrument(skip(self))]
    async fn issue_labels_replace_all(
        &self,
        owner: &str,
        name: &str,
        _issue_number: u64,
        labels: &[String],
    ) -> Result<()> {
        info!(message = "Discarding label replacement");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn issue_assignees_add(
        &self,
        owner: &str,
        name: &str,
        _issue_number: u64,
        assignees: &[String],
    ) -> Result<()> {
        info!(message = "Discarding assignee addition");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pull_request_is_ready_for_review() {
        let service = NullApiService::new();
        let pr = service.pulls_get("me", "test", 3).await.unwrap();

        assert_eq!(pr.number, 3);
        assert!(!pr.draft);
        assert!(pr.labels.is_empty());
        assert!(!pr.user.is_bot());
        assert!(service
            .pull_reviews_list("me", "test", 3)
            .await
            .unwrap()
            .is_empty());
    }
}
