// Agent model types

use serde::{Deserialize, Serialize};

use super::common::null_as_default;

/// An orchestrator-agent running next to a MySQL server
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Agent {
    pub hostname: String,
    pub port: u16,
    pub last_submitted: String,
    #[serde(deserialize_with = "null_as_default")]
    pub available_local_snapshots: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub available_snapshot_hosts: Vec<String>,
    pub total_seconds_unavailable: i64,
    pub available_disk_space_ratio: f64,
    pub logical_volume: Option<AgentLogicalVolume>,
}

/// An LVM logical volume reported by an agent
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AgentLogicalVolume {
    pub name: String,
    pub is_active: bool,
    pub has_snapshot: bool,
    pub snapshot_name: String,
    pub data_path: String,
    pub snapshot_path: String,
    #[serde(rename = "MySQLPort")]
    pub mysql_port: u16,
    #[serde(rename = "MySQLDataPath")]
    pub mysql_data_path: String,
    #[serde(rename = "MySQLDiskPath")]
    pub mysql_disk_path: String,
    pub file_system: String,
}

/// A seed (data copy) operation between two agents
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AgentSeed {
    pub seed_id: i64,
    pub target_hostname: String,
    pub source_hostname: String,
    pub start_timestamp: String,
    pub end_timestamp: String,
    pub is_complete: bool,
    pub is_successful: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AgentSeedState {
    pub seed_id: i64,
    pub state_timestamp: String,
    pub state: String,
    pub error_message: String,
}
