use labelbot_ghapi_interface::types::{GhAuthorAssociation, GhReviewApi, GhReviewStateApi};
use labelbot_models::{AuthorAssociation, ReviewEvent, ReviewState};

pub fn author_association_from_api(association: GhAuthorAssociation) -> AuthorAssociation {
    match association {
        GhAuthorAssociation::Owner => AuthorAssociation::Owner,
        GhAuthorAssociation::Member => AuthorAssociation::Member,
        GhAuthorAssociation::Collaborator => AuthorAssociation::Collaborator,
        GhAuthorAssociation::Contributor => AuthorAssociation::Contributor,
        GhAuthorAssociation::FirstTimeContributor => AuthorAssociation::FirstTimeContributor,
        GhAuthorAssociation::FirstTimer => AuthorAssociation::FirstTimer,
        GhAuthorAssociation::Mannequin => AuthorAssociation::Mannequin,
        GhAuthorAssociation::None | GhAuthorAssociation::Unknown => AuthorAssociation::None,
    }
}

fn review_state_from_api(state: GhReviewStateApi) -> ReviewState {
    match state {
        GhReviewStateApi::Approved => ReviewState::Approved,
        GhReviewStateApi::ChangesRequested => ReviewState::ChangesRequested,
        GhReviewStateApi::Commented
        | GhReviewStateApi::Dismissed
        | GhReviewStateApi::Pending
        | GhReviewStateApi::Unknown => ReviewState::Other,
    }
}

/// Convert API reviews to review events, keeping their order.
/// Reviews from deleted accounts are dropped.
pub fn review_events_from_api(reviews: Vec<GhReviewApi>) -> Vec<ReviewEvent> {
    reviews
        .into_iter()
        .filter_map(|review| {
            review.user.map(|user| {
                ReviewEvent::new(user.login, review_state_from_api(review.state)).with_association(
                    author_association_from_api(review.author_association),
                )
            })
        })
        .collect()
}
