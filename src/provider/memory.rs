//! In-memory provider, for tests and demos.

use super::{DataProvider, ProviderError, Table, TableChange};
use crate::model::{StallRecord, TenantRecord};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, RwLock};

#[derive(Default)]
pub struct MemoryProvider {
    stalls: RwLock<Vec<StallRecord>>,
    tenants: RwLock<Vec<TenantRecord>>,
    subscribers: Mutex<Vec<Sender<TableChange>>>,
    failing: AtomicBool,
}

fn lock_failed() -> ProviderError {
    ProviderError::Unavailable {
        message: "lock failed".to_string(),
    }
}

impl MemoryProvider {
    #[must_use]
    pub fn new(stalls: Vec<StallRecord>, tenants: Vec<TenantRecord>) -> Self {
        Self {
            stalls: RwLock::new(stalls),
            tenants: RwLock::new(tenants),
            ..Self::default()
        }
    }

    /// Replaces the stall table and notifies subscribers.
    pub fn set_stalls(&self, stalls: Vec<StallRecord>) {
        if let Ok(mut guard) = self.stalls.write() {
            *guard = stalls;
        }
        self.notify(Table::Stalls);
    }

    /// Replaces the tenant table and notifies subscribers.
    pub fn set_tenants(&self, tenants: Vec<TenantRecord>) {
        if let Ok(mut guard) = self.tenants.write() {
            *guard = tenants;
        }
        self.notify(Table::Tenants);
    }

    /// While set, every read fails as if the backend were down.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Sends a change to every live subscriber, dropping the ones that hung up.
    pub fn notify(&self, table: Table) {
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.retain(|tx| tx.send(TableChange { table }).is_ok());
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().map(|s| s.len()).unwrap_or(0)
    }

    fn check_available(&self) -> Result<(), ProviderError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ProviderError::Unavailable {
                message: "backend offline".to_string(),
            });
        }
        Ok(())
    }
}

impl DataProvider for MemoryProvider {
    fn list_stalls(&self) -> Result<Vec<StallRecord>, ProviderError> {
        self.check_available()?;
        self.stalls.read().map(|s| s.clone()).map_err(|_| lock_failed())
    }

    fn list_active_tenants(&self) -> Result<Vec<TenantRecord>, ProviderError> {
        self.check_available()?;
        let tenants = self.tenants.read().map_err(|_| lock_failed())?;
        Ok(tenants.iter().filter(|t| t.is_active()).cloned().collect())
    }

    fn subscribe(&self) -> Option<Receiver<TableChange>> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.lock().ok()?.push(tx);
        Some(rx)
    }
}
