use serde::{Deserialize, Serialize};

/// GitHub User.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhUser {
    /// Username.
    pub login: String,
    /// Account type.
    #[serde(rename = "type", default)]
    pub user_type: GhUserType,
}

impl GhUser {
    /// Build a regular user.
    pub fn new<T: Into<String>>(login: T) -> Self {
        Self {
            login: login.into(),
            user_type: GhUserType::User,
        }
    }

    /// Is this an automated account?
    pub fn is_bot(&self) -> bool {
        self.user_type == GhUserType::Bot || self.login.ends_with("[bot]")
    }
}

/// GitHub account type.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
pub enum GhUserType {
    /// Human user.
    #[default]
    User,
    /// Automated account (GitHub App, Dependabot, ...).
    Bot,
    /// Organization.
    Organization,
    /// Any other value.
    #[serde(other)]
    Unknown,
}
