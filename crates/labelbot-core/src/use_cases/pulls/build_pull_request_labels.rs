use async_trait::async_trait;
use labelbot_models::{PullRequestHandle, PullRequestSnapshot};
use shaku::{Component, Interface};
use tracing::warn;

use super::{LabelComputation, LabelOutcome, SkipReason};
use crate::{
    use_cases::{
        labels::LabelPolicy,
        reviews::{author_association_from_api, review_events_from_api, ReviewAggregator},
    },
    CoreContext, Result,
};

/// Fetch the pull request state and compute its labels, without applying them.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait BuildPullRequestLabelsInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
    ) -> Result<LabelOutcome>;
}

#[derive(Component)]
#[shaku(interface = BuildPullRequestLabelsInterface)]
pub(crate) struct BuildPullRequestLabels;

#[async_trait]
impl BuildPullRequestLabelsInterface for BuildPullRequestLabels {
    #[tracing::instrument(skip(self, ctx), fields(pr_handle = %pr_handle), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
    ) -> Result<LabelOutcome> {
        let upstream_pr = ctx
            .api_service
            .pulls_get(pr_handle.owner(), pr_handle.name(), pr_handle.number())
            .await?;

        if upstream_pr.user.is_bot() {
            let reason = SkipReason::BotAuthor {
                login: upstream_pr.user.login,
            };
            warn!(
                pr_handle = %pr_handle,
                reason = %reason,
                message = "Skipping pull request"
            );
            return Ok(LabelOutcome::Skipped(reason));
        }

        let reviews = ctx
            .api_service
            .pull_reviews_list(pr_handle.owner(), pr_handle.name(), pr_handle.number())
            .await?;
        let requested_reviewers = ctx
            .api_service
            .pull_reviewer_requests_list(pr_handle.owner(), pr_handle.name(), pr_handle.number())
            .await?;

        let snapshot = PullRequestSnapshot {
            is_draft: upstream_pr.draft,
            current_labels: upstream_pr.label_names(),
            requested_reviewers,
            author_association: author_association_from_api(upstream_pr.author_association),
        };
        let feedback =
            ReviewAggregator::from_config(ctx.config).aggregate(&review_events_from_api(reviews));
        let decision = LabelPolicy::from_config(ctx.config).decide(&snapshot, &feedback);

        Ok(LabelOutcome::Decided(LabelComputation {
            pr_handle: pr_handle.clone(),
            snapshot,
            feedback,
            decision,
        }))
    }
}
