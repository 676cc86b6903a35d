use std::path::{Path, PathBuf};

use async_trait::async_trait;
use clap::Parser;
use labelbot_core::use_cases::pulls::{LabelOutcome, ProcessPullRequestEventInterface};
use labelbot_ghapi_interface::types::GhPullRequestEvent;
use shaku::HasComponent;
use thiserror::Error;

use crate::{
    actions::WorkflowCommand,
    commands::{Command, CommandContext},
    Result,
};

const EVENT_PATH_ENV: &str = "GITHUB_EVENT_PATH";

#[derive(Debug, Error)]
pub(crate) enum RunError {
    #[error("Missing event payload path, use --event-path or set {}", EVENT_PATH_ENV)]
    MissingEventPath,
    #[error("Could not read event payload '{}': {}", path.display(), source)]
    ReadEvent {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not parse event payload '{}': {}", path.display(), source)]
    ParseEvent {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Synchronize the labels of the pull request a GitHub Actions event points to
#[derive(Parser)]
pub(crate) struct RunCommand {
    /// Event payload path (defaults to the GITHUB_EVENT_PATH env. var.)
    #[arg(long)]
    event_path: Option<PathBuf>,
}

impl RunCommand {
    fn resolve_event_path(&self) -> Result<PathBuf, RunError> {
        self.event_path
            .clone()
            .or_else(|| std::env::var_os(EVENT_PATH_ENV).map(PathBuf::from))
            .ok_or(RunError::MissingEventPath)
    }

    async fn read_event(path: &Path) -> Result<GhPullRequestEvent, RunError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| RunError::ReadEvent {
                path: path.into(),
                source,
            })?;

        serde_json::from_str(&content).map_err(|source| RunError::ParseEvent {
            path: path.into(),
            source,
        })
    }

    async fn process(&self, ctx: &CommandContext) -> Result<LabelOutcome> {
        let event = Self::read_event(&self.resolve_event_path()?).await?;

        let process_pull_request_event: &dyn ProcessPullRequestEventInterface =
            ctx.core_module.resolve_ref();
        Ok(process_pull_request_event
            .run(&ctx.as_core_context(), &event)
            .await?)
    }
}

#[async_trait]
impl Command for RunCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let result = self.process(&ctx).await;
        let mut writer = ctx.writer.write().await;

        match result {
            Ok(LabelOutcome::Skipped(reason)) => {
                writeln!(writer, "{}", WorkflowCommand::Warning.format(reason))?;
                Ok(())
            }
            Ok(LabelOutcome::Decided(computation)) => {
                writeln!(
                    writer,
                    "{}",
                    WorkflowCommand::Notice.format(format!(
                        "Added labels to #{}.",
                        computation.pr_handle.number()
                    ))
                )?;
                Ok(())
            }
            Err(e) => {
                writeln!(writer, "{}", WorkflowCommand::Error.format(&e))?;
                Err(e)
            }
        }
    }
}
