use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use heavyweight_core::PaginatedResponse;

/// Seed records served by the example endpoint.
pub const NAMES: [(&str, &str); 4] = [
    ("Alice", "Wonderland"),
    ("Bob", "Builder"),
    ("Charlie", "Chaplin"),
    ("Dora", "Explorer"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Name {
    #[schema(example = "Alice")]
    pub first_name: String,
    #[schema(example = "Wonderland")]
    pub last_name: String,
}

impl Name {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn seeded() -> Vec<Name> {
        NAMES
            .iter()
            .map(|(first, last)| Name::new(*first, *last))
            .collect()
    }

    /// Case-insensitive substring match on either name.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.first_name.to_lowercase().contains(&needle)
            || self.last_name.to_lowercase().contains(&needle)
    }
}

pub type NameResponse = PaginatedResponse<Name>;
