use super::{Floor, StallRecord, TenantRecord};
use std::collections::HashMap;

/// Immutable view of the backend tables taken by one refresh.
///
/// Stalls are keyed by floor and code, so a `c1` row filed under another floor never
/// colors the second floor's `c1`. Codes are matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    stalls: Vec<StallRecord>,
    tenants: Vec<TenantRecord>,
    stall_index: HashMap<(Floor, String), usize>,
    tenant_index: HashMap<String, usize>,
}

fn code_key(code: &str) -> String {
    code.trim().to_ascii_lowercase()
}

impl Snapshot {
    #[must_use]
    pub fn new(stalls: Vec<StallRecord>, tenants: Vec<TenantRecord>) -> Self {
        // First record wins when the backend reports a code twice.
        let mut stall_index = HashMap::new();
        for (i, stall) in stalls.iter().enumerate() {
            stall_index
                .entry((stall.floor, code_key(&stall.stall_code)))
                .or_insert(i);
        }
        let mut tenant_index = HashMap::new();
        for (i, tenant) in tenants.iter().enumerate() {
            tenant_index
                .entry(code_key(&tenant.stall_number))
                .or_insert(i);
        }

        Self {
            stalls,
            tenants,
            stall_index,
            tenant_index,
        }
    }

    #[must_use]
    pub fn stall(&self, floor: Floor, code: &str) -> Option<&StallRecord> {
        self.stall_index
            .get(&(floor, code_key(code)))
            .map(|&i| &self.stalls[i])
    }

    #[must_use]
    pub fn tenant_for(&self, code: &str) -> Option<&TenantRecord> {
        self.tenant_index
            .get(&code_key(code))
            .map(|&i| &self.tenants[i])
    }

    #[must_use]
    pub fn stalls(&self) -> &[StallRecord] {
        &self.stalls
    }

    #[must_use]
    pub fn tenants(&self) -> &[TenantRecord] {
        &self.tenants
    }
}
