use async_trait::async_trait;
use labelbot_models::{LabelDecision, PullRequestHandle};
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApplyPullRequestLabelsInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        decision: &LabelDecision,
    ) -> Result<()>;
}

#[derive(Component)]
#[shaku(interface = ApplyPullRequestLabelsInterface)]
pub(crate) struct ApplyPullRequestLabels;

#[async_trait]
impl ApplyPullRequestLabelsInterface for ApplyPullRequestLabels {
    #[tracing::instrument(skip(self, ctx), fields(pr_handle = %pr_handle))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        decision: &LabelDecision,
    ) -> Result<()> {
        ctx.api_service
            .issue_labels_replace_all(
                pr_handle.owner(),
                pr_handle.name(),
                pr_handle.number(),
                &decision.labels,
            )
            .await?;

        // Labels stay in place if this fails.
        if !decision.assignees.is_empty() {
            ctx.api_service
                .issue_assignees_add(
                    pr_handle.owner(),
                    pr_handle.name(),
                    pr_handle.number(),
                    &decision.assignees,
                )
                .await?;
        }

        Ok(())
    }
}
