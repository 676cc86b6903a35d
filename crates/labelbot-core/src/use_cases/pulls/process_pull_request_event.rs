use async_trait::async_trait;
use labelbot_ghapi_interface::types::GhPullRequestEvent;
use labelbot_models::PullRequestHandle;
use shaku::{Component, HasComponent, Interface};
use tracing::warn;

use super::{LabelOutcome, SkipReason, SynchronizePullRequestLabelsInterface};
use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ProcessPullRequestEventInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        event: &GhPullRequestEvent,
    ) -> Result<LabelOutcome>;
}

#[derive(Component)]
#[shaku(interface = ProcessPullRequestEventInterface)]
pub(crate) struct ProcessPullRequestEvent;

#[async_trait]
impl ProcessPullRequestEventInterface for ProcessPullRequestEvent {
    #[tracing::instrument(
        skip_all,
        fields(
            action = ?event.action,
            pr_number = ?event.number,
            repository_owner = %event.repository.owner.login,
            repository_name = %event.repository.name,
        )
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        event: &GhPullRequestEvent,
    ) -> Result<LabelOutcome> {
        let Some(number) = event.number else {
            let reason = SkipReason::MissingPullRequestNumber;
            warn!(reason = %reason, message = "Skipping event");
            return Ok(LabelOutcome::Skipped(reason));
        };

        let pr_handle: PullRequestHandle = (
            event.repository.owner.login.as_str(),
            event.repository.name.as_str(),
            number,
        )
            .into();

        let synchronize_pull_request_labels: &dyn SynchronizePullRequestLabelsInterface =
            ctx.core_module.resolve_ref();
        synchronize_pull_request_labels.run(ctx, &pr_handle).await
    }
}

#[cfg(test)]
mod tests {
    use labelbot_ghapi_interface::types::{GhRepository, GhUser};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        context::tests::CoreContextTest, use_cases::pulls::MockSynchronizePullRequestLabelsInterface,
        CoreModule,
    };

    fn event(number: Option<u64>) -> GhPullRequestEvent {
        GhPullRequestEvent {
            action: Some("synchronize".into()),
            number,
            repository: GhRepository {
                name: "test".into(),
                full_name: "me/test".into(),
                owner: GhUser::new("me"),
            },
            sender: None,
        }
    }

    #[tokio::test]
    async fn event_without_number_is_skipped() -> Result<()> {
        let mut ctx = CoreContextTest::new();

        let mut synchronize_pull_request_labels = MockSynchronizePullRequestLabelsInterface::new();
        synchronize_pull_request_labels.expect_run().never();

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn SynchronizePullRequestLabelsInterface>(Box::new(
                synchronize_pull_request_labels,
            ))
            .build();

        let outcome = ProcessPullRequestEvent
            .run(&ctx.as_context(), &event(None))
            .await?;
        assert_eq!(
            outcome,
            LabelOutcome::Skipped(SkipReason::MissingPullRequestNumber)
        );

        Ok(())
    }

    #[tokio::test]
    async fn event_with_number_is_synchronized() -> Result<()> {
        let mut ctx = CoreContextTest::new();

        let mut synchronize_pull_request_labels = MockSynchronizePullRequestLabelsInterface::new();
        synchronize_pull_request_labels
            .expect_run()
            .once()
            .withf(|_, pr_handle| pr_handle == &("me", "test", 12).into())
            .return_once(|_, _| {
                Ok(LabelOutcome::Skipped(SkipReason::BotAuthor {
                    login: "dependabot[bot]".into(),
                }))
            });

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn SynchronizePullRequestLabelsInterface>(Box::new(
                synchronize_pull_request_labels,
            ))
            .build();

        ProcessPullRequestEvent
            .run(&ctx.as_context(), &event(Some(12)))
            .await?;

        Ok(())
    }
}
