use serde::{Deserialize, Serialize};

use super::common::NamedEntity;

/// Who the book belongs to and the monthly spending ceiling they set.
/// A singleton on the book, overwritten wholesale on profile edits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub monthly_budget: f64,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Guest User".into(),
            monthly_budget: 15_000.0,
        }
    }
}

impl NamedEntity for UserProfile {
    fn name(&self) -> &str {
        &self.name
    }
}
