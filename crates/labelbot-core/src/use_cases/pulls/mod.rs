pub(crate) mod build_pull_request_labels;
pub(crate) mod process_pull_request_event;
pub(crate) mod synchronize_pull_request_labels;

use labelbot_models::{LabelDecision, PullRequestHandle, PullRequestSnapshot, ReviewerFeedback};

pub use build_pull_request_labels::BuildPullRequestLabelsInterface;
pub use process_pull_request_event::ProcessPullRequestEventInterface;
pub use synchronize_pull_request_labels::SynchronizePullRequestLabelsInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    build_pull_request_labels::MockBuildPullRequestLabelsInterface,
    process_pull_request_event::MockProcessPullRequestEventInterface,
    synchronize_pull_request_labels::MockSynchronizePullRequestLabelsInterface,
};

/// Why a pull request was left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The event payload does not point to a pull request.
    MissingPullRequestNumber,
    /// The pull request was opened by an automated account.
    BotAuthor { login: String },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingPullRequestNumber => f.write_str("No pull request number in payload."),
            Self::BotAuthor { login } => write!(f, "Pull request is authored by bot '{login}'."),
        }
    }
}

/// Everything computed for a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelComputation {
    pub pr_handle: PullRequestHandle,
    pub snapshot: PullRequestSnapshot,
    pub feedback: ReviewerFeedback,
    pub decision: LabelDecision,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelOutcome {
    Skipped(SkipReason),
    Decided(LabelComputation),
}
