mod author_association;
mod label;
mod repository;
mod user;

pub use author_association::GhAuthorAssociation;
pub use label::GhLabel;
pub use repository::GhRepository;
pub use user::{GhUser, GhUserType};
