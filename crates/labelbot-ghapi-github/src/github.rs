//! GitHub adapter

use async_trait::async_trait;
use labelbot_config::Config;
use labelbot_ghapi_interface::{
    types::{GhPullRequest, GhReviewApi, GhUser},
    ApiService, Result,
};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};

use crate::{
    auth::{build_github_url, get_authenticated_client_builder},
    errors::GitHubError,
};

const PAGE_SIZE: usize = 100;

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client, GitHubError> {
        Ok(get_authenticated_client_builder(&self.config)?.build()?)
    }

    fn build_url(&self, path: String) -> String {
        build_github_url(&self.config, path)
    }

    async fn send(&self, request: RequestBuilder, path: &str) -> Result<Response, GitHubError> {
        let response = request.send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(GitHubError::NotFoundError { path: path.into() });
        }

        Ok(response.error_for_status()?)
    }
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn pulls_get(&self, owner: &str, name: &str, issue_number: u64) -> Result<GhPullRequest> {
        let path = format!("/repos/{owner}/{name}/pulls/{issue_number}");
        let client = self.get_client()?;

        Ok(self
            .send(client.get(self.build_url(path.clone())), &path)
            .await?
            .json()
            .await
            .map_err(GitHubError::from)?)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn pull_reviews_list(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<Vec<GhReviewApi>> {
        let path = format!("/repos/{owner}/{name}/pulls/{issue_number}/reviews");
        let client = self.get_client()?;
        let mut reviews = Vec::new();

        // GitHub returns reviews in chronological order, page after page.
        for page in 1.. {
            let page_reviews: Vec<GhReviewApi> = self
                .send(
                    client
                        .get(self.build_url(path.clone()))
                        .query(&[("per_page", PAGE_SIZE), ("page", page)]),
                    &path,
                )
                .await?
                .json()
                .await
                .map_err(GitHubError::from)?;

            let last_page = page_reviews.len() < PAGE_SIZE;
            reviews.extend(page_reviews);
            if last_page {
                break;
            }
        }

        Ok(reviews)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn pull_reviewer_requests_list(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<Vec<String>> {
        #[derive(Deserialize)]
        struct Response {
            users: Vec<GhUser>,
        }

        let path = format!("/repos/{owner}/{name}/pulls/{issue_number}/requested_reviewers");
        let client = self.get_client()?;

        Ok(self
            .send(client.get(self.build_url(path.clone())), &path)
            .await?
            .json::<Response>()
            .await
            .map_err(GitHubError::from)?
            .users
            .into_iter()
            .map(|u| u.login)
            .collect())
    }

    #[tracing::instrument(skip(self))]
    async fn issue_labels_replace_all(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        labels: &[String],
    ) -> Result<()> {
        #[derive(Serialize)]
        struct Request<'a> {
            labels: &'a [String],
        }

        let path = format!("/repos/{owner}/{name}/issues/{issue_number}/labels");
        let client = self.get_client()?;

        self.send(
            client
                .put(self.build_url(path.clone()))
                .json(&Request { labels }),
            &path,
        )
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn issue_assignees_add(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        assignees: &[String],
    ) -> Result<()> {
        #[derive(Serialize)]
        struct Request<'a> {
            assignees: &'a [String],
        }

        let path = format!("/repos/{owner}/{name}/issues/{issue_number}/assignees");
        let client = self.get_client()?;

        self.send(
            client
                .post(self.build_url(path.clone()))
                .json(&Request { assignees }),
            &path,
        )
        .await?;

        Ok(())
    }
}
