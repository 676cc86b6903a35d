use crate::AuthorAssociation;

/// State of a pull request needed to compute its labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestSnapshot {
    /// Draft status.
    pub is_draft: bool,
    /// Labels currently applied, in tracker order.
    pub current_labels: Vec<String>,
    /// Reviewers requested but who did not review yet.
    pub requested_reviewers: Vec<String>,
    /// Author relation to the repository.
    pub author_association: AuthorAssociation,
}
