use super::Floor;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OccupancyStatus {
    #[default]
    Vacant,
    Occupied,
}

/// A leasable stall as the backend reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StallRecord {
    pub id: String,
    pub stall_code: String,
    pub floor: Floor,
    pub monthly_rent: f64,
    #[serde(default)]
    pub occupancy_status: OccupancyStatus,
    #[serde(default)]
    pub floor_size: Option<f64>,
    #[serde(default)]
    pub electricity_reader: Option<String>,
}

impl StallRecord {
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.occupancy_status == OccupancyStatus::Occupied
    }
}
