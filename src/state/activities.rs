#[cfg(test)]
#[path = "activities_test.rs"]
mod activities_test;

use std::collections::BTreeMap;

/// A named activity with a schedule, capacity, and registered participants.
///
/// Matches the per-entry value shape of `GET /activities`. Participant
/// order is whatever the server sent and is preserved as-is.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Goes negative when the server reports more
    /// participants than `max_participants`; the client renders that
    /// as-is rather than second-guessing the server.
    pub fn spots_left(&self) -> i64 {
        self.max_participants - self.participants.len() as i64
    }
}

/// The `GET /activities` response: activity name (unique key) to details.
///
/// `BTreeMap` gives a deterministic, name-sorted render order for cards
/// and select options.
pub type ActivityMap = BTreeMap<String, Activity>;
