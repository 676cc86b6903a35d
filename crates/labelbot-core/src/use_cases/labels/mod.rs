pub(crate) mod apply_pull_request_labels;
pub(crate) mod utils;

pub use apply_pull_request_labels::ApplyPullRequestLabelsInterface;
pub use utils::LabelPolicy;

#[cfg(any(test, feature = "testkit"))]
pub use self::apply_pull_request_labels::MockApplyPullRequestLabelsInterface;
