//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
///
/// Categories are seeded once per process and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Short slug, unique (e.g. "user-devices")
    pub id: String,
    pub name: String,
    pub description: String,
    /// Opaque icon reference for the storefront
    pub icon: String,
}

impl Category {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
        }
    }
}
