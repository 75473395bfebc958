use serde::{Deserialize, Serialize};

/// Projection of a tenant row shown in the stall detail popup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantRecord {
    pub business_name: String,
    pub contact_person: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub stall_number: String,
    #[serde(default)]
    pub lease_start: Option<String>,
    #[serde(default)]
    pub lease_end: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl TenantRecord {
    /// Tenants without a status column are treated as active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status
            .as_deref()
            .is_none_or(|s| s.trim().eq_ignore_ascii_case("active"))
    }
}
