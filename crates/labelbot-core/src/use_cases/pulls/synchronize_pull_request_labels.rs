use async_trait::async_trait;
use labelbot_models::PullRequestHandle;
use shaku::{Component, HasComponent, Interface};
use tracing::info;

use super::{BuildPullRequestLabelsInterface, LabelOutcome};
use crate::{use_cases::labels::ApplyPullRequestLabelsInterface, CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait SynchronizePullRequestLabelsInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
    ) -> Result<LabelOutcome>;
}

#[derive(Component)]
#[shaku(interface = SynchronizePullRequestLabelsInterface)]
pub(crate) struct SynchronizePullRequestLabels;

#[async_trait]
impl SynchronizePullRequestLabelsInterface for SynchronizePullRequestLabels {
    #[tracing::instrument(skip(self, ctx), fields(pr_handle = %pr_handle))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
    ) -> Result<LabelOutcome> {
        let build_pull_request_labels: &dyn BuildPullRequestLabelsInterface =
            ctx.core_module.resolve_ref();
        let outcome = build_pull_request_labels.run(ctx, pr_handle).await?;

        if let LabelOutcome::Decided(computation) = &outcome {
            let apply_pull_request_labels: &dyn ApplyPullRequestLabelsInterface =
                ctx.core_module.resolve_ref();
            apply_pull_request_labels
                .run(ctx, pr_handle, &computation.decision)
                .await?;

            info!(
                pr_handle = %pr_handle,
                labels = ?computation.decision.labels,
                assignees = ?computation.decision.assignees,
                message = "Pull request labels synchronized"
            );
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use labelbot_ghapi_interface::ApiError;
    use labelbot_models::{LabelDecision, PullRequestSnapshot, ReviewerFeedback};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        context::tests::CoreContextTest,
        use_cases::{
            labels::MockApplyPullRequestLabelsInterface,
            pulls::{LabelComputation, MockBuildPullRequestLabelsInterface, SkipReason},
        },
        CoreModule, DomainError,
    };

    fn computation() -> LabelComputation {
        LabelComputation {
            pr_handle: ("me", "test", 1).into(),
            snapshot: PullRequestSnapshot::default(),
            feedback: ReviewerFeedback::new(),
            decision: LabelDecision {
                labels: vec!["approved".into()],
                assignees: vec!["alice".into()],
            },
        }
    }

    #[tokio::test]
    async fn decided_labels_are_applied() -> Result<()> {
        let mut ctx = CoreContextTest::new();

        let mut build_pull_request_labels = MockBuildPullRequestLabelsInterface::new();
        build_pull_request_labels
            .expect_run()
            .once()
            .withf(|_, pr_handle| pr_handle == &("me", "test", 1).into())
            .return_once(|_, _| Ok(LabelOutcome::Decided(computation())));

        let mut apply_pull_request_labels = MockApplyPullRequestLabelsInterface::new();
        apply_pull_request_labels
            .expect_run()
            .once()
            .withf(|_, pr_handle, decision| {
                pr_handle == &("me", "test", 1).into() && decision == &computation().decision
            })
            .return_once(|_, _, _| Ok(()));

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn BuildPullRequestLabelsInterface>(Box::new(
                build_pull_request_labels,
            ))
            .with_component_override::<dyn ApplyPullRequestLabelsInterface>(Box::new(
                apply_pull_request_labels,
            ))
            .build();

        let outcome = SynchronizePullRequestLabels
            .run(&ctx.as_context(), &("me", "test", 1).into())
            .await?;
        assert_eq!(outcome, LabelOutcome::Decided(computation()));

        Ok(())
    }

    #[tokio::test]
    async fn skipped_pull_request_is_not_touched() -> Result<()> {
        let mut ctx = CoreContextTest::new();

        let mut build_pull_request_labels = MockBuildPullRequestLabelsInterface::new();
        build_pull_request_labels
            .expect_run()
            .once()
            .return_once(|_, _| {
                Ok(LabelOutcome::Skipped(SkipReason::BotAuthor {
                    login: "dependabot[bot]".into(),
                }))
            });

        let mut apply_pull_request_labels = MockApplyPullRequestLabelsInterface::new();
        apply_pull_request_labels.expect_run().never();

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn BuildPullRequestLabelsInterface>(Box::new(
                build_pull_request_labels,
            ))
            .with_component_override::<dyn ApplyPullRequestLabelsInterface>(Box::new(
                apply_pull_request_labels,
            ))
            .build();

        SynchronizePullRequestLabels
            .run(&ctx.as_context(), &("me", "test", 1).into())
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn labels_remain_when_assignment_fails() {
        let mut ctx = CoreContextTest::new();

        ctx.api_service
            .expect_pulls_get()
            .once()
            .return_once(|_, _, number| {
                Ok(labelbot_ghapi_interface::types::GhPullRequest {
                    number,
                    ..Default::default()
                })
            });
        ctx.api_service
            .expect_pull_reviews_list()
            .once()
            .return_once(|_, _, _| Ok(vec![]));
        ctx.api_service
            .expect_pull_reviewer_requests_list()
            .once()
            .return_once(|_, _, _| Ok(vec!["carol".into()]));
        ctx.api_service
            .expect_issue_labels_replace_all()
            .once()
            .withf(|_, _, _, labels| labels == ["🕵️‍♀️ needs review".to_string()])
            .return_once(|_, _, _, _| Ok(()));
        ctx.api_service
            .expect_issue_assignees_add()
            .once()
            .withf(|_, _, _, assignees| assignees == ["carol".to_string()])
            .return_once(|_, _, _, _| {
                Err(ApiError::NotFound {
                    path: "/repos/me/test/issues/1/assignees".into(),
                })
            });

        let result = SynchronizePullRequestLabels
            .run(&ctx.as_context(), &("me", "test", 1).into())
            .await;

        match result {
            Err(DomainError::ApiError { source }) => assert_eq!(
                source.to_string(),
                "Resource not found: /repos/me/test/issues/1/assignees"
            ),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
