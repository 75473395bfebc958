//! Stall and tenant data sources.
//!
//! The map never talks to a backend directly: everything arrives through a
//! [`DataProvider`], which may also push [`TableChange`] notifications.

pub mod fetch;
pub mod file;
pub mod memory;

pub use crate::error::ProviderError;
pub use fetch::{FetchOutcome, Fetcher};
pub use file::FileProvider;
pub use memory::MemoryProvider;

use crate::model::{Snapshot, StallRecord, TenantRecord};
use std::fmt;
use std::sync::mpsc::Receiver;

/// Backend tables the map listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Stalls,
    Tenants,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Table::Stalls => "stalls",
            Table::Tenants => "tenants",
        })
    }
}

/// Notification that a table's contents changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableChange {
    pub table: Table,
}

pub trait DataProvider: Send + Sync {
    fn list_stalls(&self) -> Result<Vec<StallRecord>, ProviderError>;

    /// Tenants whose lease is currently active.
    fn list_active_tenants(&self) -> Result<Vec<TenantRecord>, ProviderError>;

    /// Change stream for the stall and tenant tables. Dropping the receiver unsubscribes.
    fn subscribe(&self) -> Option<Receiver<TableChange>> {
        None
    }
}

/// Reads both tables into one snapshot. Either failure fails the whole read.
pub fn load_snapshot(provider: &dyn DataProvider) -> Result<Snapshot, ProviderError> {
    let stalls = provider.list_stalls()?;
    let tenants = provider.list_active_tenants()?;
    Ok(Snapshot::new(stalls, tenants))
}
