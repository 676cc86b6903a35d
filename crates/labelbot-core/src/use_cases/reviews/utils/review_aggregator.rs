use labelbot_config::Config;
use labelbot_models::{ReviewEvent, ReviewerFeedback};

/// Reduces a review history to the latest actionable state per reviewer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewAggregator {
    trusted_reviews_only: bool,
}

impl ReviewAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only count reviews from repository owners and members.
    pub fn with_trusted_reviews_only(mut self, value: bool) -> Self {
        self.trusted_reviews_only = value;
        self
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new().with_trusted_reviews_only(config.policy.trusted_reviews_only)
    }

    /// Aggregate reviews, oldest first.
    ///
    /// A later approval or change request replaces the previous one of the
    /// same reviewer; other states never touch the result.
    pub fn aggregate(&self, reviews: &[ReviewEvent]) -> ReviewerFeedback {
        reviews
            .iter()
            .filter(|review| !self.trusted_reviews_only || review.author_association.is_trusted())
            .fold(ReviewerFeedback::new(), |mut feedback, review| {
                feedback.record(review.reviewer.as_str(), review.state);
                feedback
            })
    }
}
