//! Logic module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::{
    labels::apply_pull_request_labels::ApplyPullRequestLabels,
    pulls::{
        build_pull_request_labels::BuildPullRequestLabels,
        process_pull_request_event::ProcessPullRequestEvent,
        synchronize_pull_request_labels::SynchronizePullRequestLabels,
    },
};

module! {
    pub CoreModule {
        components = [
            ApplyPullRequestLabels, BuildPullRequestLabels,
            SynchronizePullRequestLabels, ProcessPullRequestEvent
        ],
        providers = []
    }
}
