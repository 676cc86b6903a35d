use std::collections::BTreeMap;

use crate::ReviewState;

/// Latest actionable review state per reviewer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewerFeedback {
    states: BTreeMap<String, ReviewState>,
}

impl ReviewerFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state of a reviewer, replacing any previous one.
    /// Non-actionable states are ignored.
    pub fn record<T: Into<String>>(&mut self, reviewer: T, state: ReviewState) {
        if state.is_actionable() {
            self.states.insert(reviewer.into(), state);
        }
    }

    pub fn get(&self, reviewer: &str) -> Option<ReviewState> {
        self.states.get(reviewer).copied()
    }

    /// Is there at least one reviewer whose latest state is `state`?
    pub fn has_state(&self, state: ReviewState) -> bool {
        self.states.values().any(|s| *s == state)
    }

    /// Reviewers, in alphabetical order.
    pub fn reviewers(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }

    /// Reviewers with their state, in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ReviewState)> {
        self.states
            .iter()
            .map(|(reviewer, state)| (reviewer.as_str(), *state))
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<T: Into<String>> FromIterator<(T, ReviewState)> for ReviewerFeedback {
    fn from_iter<I: IntoIterator<Item = (T, ReviewState)>>(iter: I) -> Self {
        let mut feedback = Self::new();
        for (reviewer, state) in iter {
            feedback.record(reviewer, state);
        }
        feedback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_states_are_not_recorded() {
        let mut feedback = ReviewerFeedback::new();
        feedback.record("a", ReviewState::Approved);
        feedback.record("a", ReviewState::Other);
        feedback.record("b", ReviewState::Other);

        assert_eq!(feedback.len(), 1);
        assert_eq!(feedback.get("a"), Some(ReviewState::Approved));
        assert_eq!(feedback.get("b"), None);
    }

    #[test]
    fn iter_pairs_reviewers_with_states() {
        let feedback: ReviewerFeedback = [
            ("bob", ReviewState::Approved),
            ("alice", ReviewState::ChangesRequested),
            ("carol", ReviewState::Other),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            feedback.iter().collect::<Vec<_>>(),
            vec![
                ("alice", ReviewState::ChangesRequested),
                ("bob", ReviewState::Approved),
            ]
        );
    }
}
