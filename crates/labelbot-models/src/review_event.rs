use crate::{AuthorAssociation, ReviewState};

/// A submitted review, as seen in the review history of a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEvent {
    /// Reviewer login.
    pub reviewer: String,
    /// Review verdict.
    pub state: ReviewState,
    /// Reviewer relation to the repository.
    pub author_association: AuthorAssociation,
}

impl ReviewEvent {
    pub fn new<T: Into<String>>(reviewer: T, state: ReviewState) -> Self {
        Self {
            reviewer: reviewer.into(),
            state,
            author_association: AuthorAssociation::None,
        }
    }

    pub fn with_association(mut self, author_association: AuthorAssociation) -> Self {
        self.author_association = author_association;
        self
    }
}
