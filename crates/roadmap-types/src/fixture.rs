//! The local roadmap fixture document
//!
//! Only the `roadmaps[].id` field is consulted; every other field in the file
//! is ignored.

use serde::{Deserialize, Serialize};

/// Top-level fixture document (`{"roadmaps": [...]}`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoadmapFixture {
    /// Known roadmaps; absent or `null` is treated as empty
    #[serde(default)]
    pub roadmaps: Option<Vec<FixtureEntry>>,
}

/// One roadmap listed in the fixture
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FixtureEntry {
    #[serde(default)]
    pub id: Option<String>,
}

impl RoadmapFixture {
    /// Identifier of the first listed roadmap
    ///
    /// `None` when the list is empty or the first entry's id is missing,
    /// `null` or empty. Later entries are never consulted.
    pub fn first_roadmap_id(&self) -> Option<&str> {
        self.roadmaps
            .as_deref()
            .and_then(|roadmaps| roadmaps.first())
            .and_then(|entry| entry.id.as_deref())
            .filter(|id| !id.is_empty())
    }
}
