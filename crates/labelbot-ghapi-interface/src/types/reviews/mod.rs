mod review;
mod review_state;

pub use review::GhReviewApi;
pub use review_state::GhReviewStateApi;
