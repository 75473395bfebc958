pub mod floor;
pub mod snapshot;
pub mod stall;
pub mod tenant;

pub use floor::Floor;
pub use snapshot::Snapshot;
pub use stall::{OccupancyStatus, StallRecord};
pub use tenant::TenantRecord;
