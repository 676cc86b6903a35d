mod conversions;
mod review_aggregator;

pub use conversions::{author_association_from_api, review_events_from_api};
pub use review_aggregator::ReviewAggregator;
