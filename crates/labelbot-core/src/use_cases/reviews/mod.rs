pub(crate) mod utils;

pub use utils::{author_association_from_api, review_events_from_api, ReviewAggregator};
