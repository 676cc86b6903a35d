use serde::{Deserialize, Serialize};

/// GitHub Label.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct GhLabel {
    /// Name.
    pub name: String,
    /// Color.
    #[serde(default)]
    pub color: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
}

impl GhLabel {
    /// Build a label from its name.
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
