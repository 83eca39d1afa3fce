// Audit and hostname resolution model types

use serde::{Deserialize, Serialize};

use super::key::InstanceKey;

/// An entry of orchestrator's audit log
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuditEntry {
    pub audit_id: i64,
    pub audit_timestamp: String,
    pub audit_type: String,
    pub audit_instance_key: InstanceKey,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HostnameResolveCache {
    pub hostname: String,
    pub resolved_hostname: String,
}
