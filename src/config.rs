//! Runtime configuration for the floor map.

use crate::coordinator::SelectionPolicy;
use crate::model::Floor;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub policy: SelectionPolicy,
    /// Floor shown on mount.
    pub initial_floor: Floor,
    /// How often file-backed data is checked for edits.
    pub poll_interval: Duration,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            policy: SelectionPolicy::ViewOnly,
            initial_floor: Floor::Ground,
            poll_interval: Duration::from_secs(1),
        }
    }
}

impl MapConfig {
    #[must_use]
    pub fn picker(allow_occupied: bool) -> Self {
        Self {
            policy: SelectionPolicy::Selectable { allow_occupied },
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_initial_floor(mut self, floor: Floor) -> Self {
        self.initial_floor = floor;
        self
    }
}
