// Maintenance model types

use serde::{Deserialize, Serialize};

use super::key::InstanceKey;

/// A maintenance window placed on an instance
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Maintenance {
    pub maintenance_id: u64,
    pub key: InstanceKey,
    pub begin_timestamp: String,
    pub seconds_elapsed: u64,
    pub is_active: bool,
    pub owner: String,
    pub reason: String,
}
