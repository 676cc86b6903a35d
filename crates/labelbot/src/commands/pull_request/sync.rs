use async_trait::async_trait;
use clap::Parser;
use labelbot_core::use_cases::pulls::{LabelOutcome, SynchronizePullRequestLabelsInterface};
use labelbot_models::RepositoryPath;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Synchronize pull request labels and assignees from upstream
#[derive(Debug, Parser)]
pub(crate) struct PullRequestSyncCommand {
    /// Repository path (e.g. 'MyOrganization/my-project')
    repository_path: RepositoryPath,

    /// Pull request number
    number: u64,
}

#[async_trait]
impl Command for PullRequestSyncCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let (repo_owner, repo_name) = self.repository_path.components();

        let synchronize_pull_request_labels: &dyn SynchronizePullRequestLabelsInterface =
            ctx.core_module.resolve_ref();
        let outcome = synchronize_pull_request_labels
            .run(
                &ctx.as_core_context(),
                &(repo_owner, repo_name, self.number).into(),
            )
            .await?;

        match outcome {
            LabelOutcome::Skipped(reason) => writeln!(
                ctx.writer.write().await,
                "Pull request #{} from '{}' skipped: {}",
                self.number,
                self.repository_path,
                reason
            )?,
            LabelOutcome::Decided(computation) => {
                writeln!(
                    ctx.writer.write().await,
                    "Pull request #{} from '{}' updated from GitHub.",
                    self.number,
                    self.repository_path
                )?;
                writeln!(
                    ctx.writer.write().await,
                    "Labels: {}",
                    computation.decision.labels.join(", ")
                )?;
                writeln!(
                    ctx.writer.write().await,
                    "Assignees: {}",
                    computation.decision.assignees.join(", ")
                )?;
            }
        }

        Ok(())
    }
}
