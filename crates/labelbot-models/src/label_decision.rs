use serde::Serialize;

/// Target labels and assignees of a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LabelDecision {
    /// Full label set, to replace the current one.
    pub labels: Vec<String>,
    /// Users to assign, sorted and without duplicates.
    pub assignees: Vec<String>,
}
