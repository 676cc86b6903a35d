use std::collections::BTreeSet;

use labelbot_config::Config;
use labelbot_models::{
    LabelDecision, LabelVocabulary, ManagedLabel, PullRequestSnapshot, ReviewState,
    ReviewerFeedback,
};

/// Computes the labels and assignees of a pull request.
#[derive(Debug, Clone, Default)]
pub struct LabelPolicy {
    vocabulary: LabelVocabulary,
    label_contributors: bool,
}

impl LabelPolicy {
    pub fn new(vocabulary: LabelVocabulary) -> Self {
        Self {
            vocabulary,
            label_contributors: false,
        }
    }

    /// Manage the contributor label.
    pub fn with_contributor_label(mut self, value: bool) -> Self {
        self.label_contributors = value;
        self
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(LabelVocabulary::from(&config.labels))
            .with_contributor_label(config.policy.label_contributors)
    }

    pub fn decide(&self, pr: &PullRequestSnapshot, feedback: &ReviewerFeedback) -> LabelDecision {
        let mut labels = self.preserved_labels(&pr.current_labels);

        if self.label_contributors && pr.author_association.is_contributor() {
            labels.push(self.name(ManagedLabel::Contributor));
        }

        if pr.is_draft {
            labels.push(self.name(ManagedLabel::WorkInProgress));
            return LabelDecision {
                labels,
                assignees: vec![],
            };
        }

        labels.push(self.name(Self::choose_review_step(feedback)));
        LabelDecision {
            labels,
            assignees: Self::assignees(pr, feedback),
        }
    }

    /// Review step of a ready pull request.
    /// A single change request outweighs any number of approvals.
    pub fn choose_review_step(feedback: &ReviewerFeedback) -> ManagedLabel {
        if feedback.has_state(ReviewState::ChangesRequested) {
            ManagedLabel::ChangesRequired
        } else if feedback.has_state(ReviewState::Approved) {
            ManagedLabel::Approved
        } else {
            ManagedLabel::NeedsReview
        }
    }

    fn assignees(pr: &PullRequestSnapshot, feedback: &ReviewerFeedback) -> Vec<String> {
        feedback
            .reviewers()
            .chain(pr.requested_reviewers.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Current labels without the ones this policy owns.
    fn preserved_labels(&self, current_labels: &[String]) -> Vec<String> {
        current_labels
            .iter()
            .filter(|name| !self.owns(name))
            .cloned()
            .collect()
    }

    fn owns(&self, name: &str) -> bool {
        match self.vocabulary.parse(name) {
            Some(ManagedLabel::Contributor) => self.label_contributors,
            Some(_) => true,
            None => false,
        }
    }

    fn name(&self, label: ManagedLabel) -> String {
        self.vocabulary.name(label).to_string()
    }
}
