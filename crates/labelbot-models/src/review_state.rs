use serde::Serialize;

/// Reviewer verdict, as far as labelling is concerned.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReviewState {
    /// Approved.
    Approved,
    /// Changes requested.
    ChangesRequested,
    /// Anything else (comments, dismissals, pending reviews, unknown states).
    Other,
}

impl ReviewState {
    /// Does this state count as reviewer feedback?
    pub fn is_actionable(self) -> bool {
        matches!(self, Self::Approved | Self::ChangesRequested)
    }
}
