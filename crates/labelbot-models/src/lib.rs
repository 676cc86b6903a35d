//! Domain models.

#![warn(clippy::all)]

mod author_association;
mod label_decision;
mod managed_label;
mod pull_request_handle;
mod pull_request_snapshot;
mod repository_path;
mod review_event;
mod review_state;
mod reviewer_feedback;

pub use author_association::AuthorAssociation;
pub use label_decision::LabelDecision;
pub use managed_label::{LabelVocabulary, ManagedLabel};
pub use pull_request_handle::{PullRequestHandle, PullRequestHandleError};
pub use pull_request_snapshot::PullRequestSnapshot;
pub use repository_path::{RepositoryPath, RepositoryPathError};
pub use review_event::ReviewEvent;
pub use review_state::ReviewState;
pub use reviewer_feedback::ReviewerFeedback;
