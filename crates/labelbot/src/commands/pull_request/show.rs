use async_trait::async_trait;
use clap::Parser;
use labelbot_core::use_cases::pulls::{BuildPullRequestLabelsInterface, LabelOutcome};
use labelbot_models::RepositoryPath;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Show the labels and assignees a pull request should have, without applying them
#[derive(Parser)]
pub(crate) struct PullRequestShowCommand {
    /// Repository path (e.g. 'MyOrganization/my-project')
    repository_path: RepositoryPath,

    /// Pull request number
    number: u64,
}

#[async_trait]
impl Command for PullRequestShowCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let (owner, name) = self.repository_path.components();

        let build_pull_request_labels: &dyn BuildPullRequestLabelsInterface =
            ctx.core_module.resolve_ref();
        let outcome = build_pull_request_labels
            .run(&ctx.as_core_context(), &(owner, name, self.number).into())
            .await?;

        writeln!(
            ctx.writer.write().await,
            "Accessing pull request #{} on repository '{}':",
            self.number,
            self.repository_path
        )?;

        match outcome {
            LabelOutcome::Skipped(reason) => {
                writeln!(ctx.writer.write().await, "Skipped: {}", reason)?;
            }
            LabelOutcome::Decided(computation) => {
                for (reviewer, state) in computation.feedback.iter() {
                    writeln!(ctx.writer.write().await, "- {}: {:?}", reviewer, state)?;
                }
                writeln!(
                    ctx.writer.write().await,
                    "{}",
                    serde_json::to_string_pretty(&computation.decision)?
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use labelbot_ghapi_interface::types::{GhPullRequest, GhReviewApi, GhReviewStateApi};
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, CommandContextTest};

    #[tokio::test]
    async fn run() -> Result<(), Box<dyn Error>> {
        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_pulls_get()
            .once()
            .return_once(|_, _, _| {
                Ok(GhPullRequest {
                    number: 1,
                    ..Default::default()
                })
            });
        ctx.api_service
            .expect_pull_reviews_list()
            .once()
            .return_once(|_, _, _| {
                Ok(vec![
                    GhReviewApi::new("bob", GhReviewStateApi::Approved),
                    GhReviewApi::new("alice", GhReviewStateApi::ChangesRequested),
                ])
            });
        ctx.api_service
            .expect_pull_reviewer_requests_list()
            .once()
            .return_once(|_, _, _| Ok(vec![]));
        ctx.api_service.expect_issue_labels_replace_all().never();
        ctx.api_service.expect_issue_assignees_add().never();

        assert_eq!(
            test_command(ctx, &["pull-requests", "show", "me/test", "1"]).await,
            concat!(
                "Accessing pull request #1 on repository 'me/test':\n",
                "- alice: ChangesRequested\n",
                "- bob: Approved\n",
                "{\n",
                "  \"labels\": [\n",
                "    \"changes required\"\n",
                "  ],\n",
                "  \"assignees\": [\n",
                "    \"alice\",\n",
                "    \"bob\"\n",
                "  ]\n",
                "}\n"
            )
        );

        Ok(())
    }
}
