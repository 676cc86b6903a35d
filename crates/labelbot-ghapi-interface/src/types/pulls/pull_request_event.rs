use serde::{Deserialize, Serialize};

use crate::types::common::{GhRepository, GhUser};

/// GitHub Pull request event payload, as received by a workflow run.
///
/// Only the fields needed to locate the pull request are read.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Eq, PartialEq)]
pub struct GhPullRequestEvent {
    /// Action.
    #[serde(default)]
    pub action: Option<String>,
    /// Number. Absent on events not bound to a pull request.
    #[serde(default)]
    pub number: Option<u64>,
    /// Repository.
    pub repository: GhRepository,
    /// Sender.
    #[serde(default)]
    pub sender: Option<GhUser>,
}
