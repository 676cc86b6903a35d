//! Label types.

use labelbot_config::LabelsConfig;

/// Label owned by the bot, recomputed on each run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ManagedLabel {
    /// Draft pull request.
    WorkInProgress,
    /// At least one approval and no change request.
    Approved,
    /// At least one reviewer requested changes.
    ChangesRequired,
    /// No actionable feedback yet.
    NeedsReview,
    /// Author is an outside contributor.
    /// Only managed when contributor labelling is enabled.
    Contributor,
}

impl ManagedLabel {
    /// Labels describing the review step of a pull request.
    pub const STEPS: [ManagedLabel; 4] = [
        Self::WorkInProgress,
        Self::Approved,
        Self::ChangesRequired,
        Self::NeedsReview,
    ];
}

/// Mapping between managed labels and their names on the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelVocabulary {
    wip: String,
    approved: String,
    changes_required: String,
    needs_review: String,
    contributor: String,
}

impl LabelVocabulary {
    /// Tracker name of a managed label.
    pub fn name(&self, label: ManagedLabel) -> &str {
        match label {
            ManagedLabel::WorkInProgress => &self.wip,
            ManagedLabel::Approved => &self.approved,
            ManagedLabel::ChangesRequired => &self.changes_required,
            ManagedLabel::NeedsReview => &self.needs_review,
            ManagedLabel::Contributor => &self.contributor,
        }
    }

    /// Find the managed label matching a tracker label name.
    ///
    /// GitHub label names are case-insensitive, so is the lookup.
    pub fn parse(&self, name: &str) -> Option<ManagedLabel> {
        let name = name.to_lowercase();
        ManagedLabel::STEPS
            .into_iter()
            .chain(std::iter::once(ManagedLabel::Contributor))
            .find(|label| self.name(*label).to_lowercase() == name)
    }
}

impl From<&LabelsConfig> for LabelVocabulary {
    fn from(config: &LabelsConfig) -> Self {
        Self {
            wip: config.wip.clone(),
            approved: config.approved.clone(),
            changes_required: config.changes_required.clone(),
            needs_review: config.needs_review.clone(),
            contributor: config.contributor.clone(),
        }
    }
}

impl Default for LabelVocabulary {
    fn default() -> Self {
        Self::from(&LabelsConfig::default())
    }
}
