use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// GitHub author association.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GhAuthorAssociation {
    /// Repository owner.
    Owner,
    /// Organization member.
    Member,
    /// Repository collaborator.
    Collaborator,
    /// Previous contributor.
    Contributor,
    /// First contribution to this repository.
    FirstTimeContributor,
    /// First contribution on GitHub.
    FirstTimer,
    /// Placeholder for an imported user.
    Mannequin,
    /// No association.
    #[default]
    None,
    /// Any other value.
    #[serde(other)]
    Unknown,
}

impl Display for GhAuthorAssociation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&serde_plain::to_string(&self).map_err(|_| std::fmt::Error)?)
    }
}
