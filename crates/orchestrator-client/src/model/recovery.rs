// Recovery and replication analysis model types

use serde::{Deserialize, Serialize};

use super::cluster::ClusterInfo;
use super::common::null_as_default;
use super::instance::BinlogCoordinates;
use super::key::InstanceKey;

/// Orchestrator's analysis of a replication problem at one instance
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReplicationAnalysis {
    pub analyzed_instance_key: InstanceKey,
    pub analyzed_instance_master_key: InstanceKey,
    pub cluster_details: ClusterInfo,
    pub analysis: String,
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub structure_analysis: Vec<String>,
    pub is_master: bool,
    pub is_co_master: bool,
    pub last_check_valid: bool,
    pub last_check_partial_success: bool,
    pub count_replicas: u64,
    pub count_valid_replicas: u64,
    pub count_valid_replicating_replicas: u64,
    pub count_replicas_failing_to_connect_to_master: u64,
    pub count_downtimed_replicas: u64,
    pub replication_depth: u64,
    pub is_downtimed: bool,
    pub is_replicas_downtimed: bool,
    pub downtime_end_timestamp: String,
    pub downtime_remaining_seconds: i64,
    pub is_binlog_server: bool,
    #[serde(rename = "PseudoGTIDImmediateTopology")]
    pub pseudo_gtid_immediate_topology: bool,
    #[serde(rename = "OracleGTIDImmediateTopology")]
    pub oracle_gtid_immediate_topology: bool,
    #[serde(rename = "MariaDBGTIDImmediateTopology")]
    pub mariadb_gtid_immediate_topology: bool,
    pub binlog_server_immediate_topology: bool,
    pub semi_sync_master_enabled: bool,
    pub semi_sync_master_status: bool,
    pub semi_sync_master_wait_for_replica_count: u64,
    pub semi_sync_master_clients: u64,
    pub count_semi_sync_replicas_enabled: u64,
    pub is_actionable_recovery: bool,
    pub processing_node_hostname: String,
    pub processing_node_token: String,
    pub count_additional_agreeing_nodes: i64,
    pub start_active_period: String,
    pub skippable_due_to_downtime: bool,
    #[serde(rename = "GTIDMode")]
    pub gtid_mode: String,
    #[serde(rename = "MinReplicaGTIDMode")]
    pub min_replica_gtid_mode: String,
    #[serde(rename = "MaxReplicaGTIDMode")]
    pub max_replica_gtid_mode: String,
    #[serde(rename = "MaxReplicaGTIDErrant")]
    pub max_replica_gtid_errant: String,
    pub command_hint: String,
    pub is_read_only: bool,
}

/// A recovery process run (or running) by orchestrator
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TopologyRecovery {
    pub id: i64,
    #[serde(rename = "UID")]
    pub uid: String,
    pub analysis_entry: ReplicationAnalysis,
    pub successor_key: Option<InstanceKey>,
    pub successor_alias: String,
    pub successor_binlog_coordinates: Option<BinlogCoordinates>,
    pub is_active: bool,
    pub is_successful: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub lost_replicas: Vec<InstanceKey>,
    #[serde(deserialize_with = "null_as_default")]
    pub participating_instance_keys: Vec<InstanceKey>,
    #[serde(deserialize_with = "null_as_default")]
    pub all_errors: Vec<String>,
    pub recovery_start_timestamp: String,
    pub recovery_end_timestamp: String,
    pub processing_node_hostname: String,
    pub processing_node_token: String,
    pub acknowledged: bool,
    pub acknowledged_at: String,
    pub acknowledged_by: String,
    pub acknowledged_comment: String,
    pub last_detection_id: i64,
    pub related_recovery_id: i64,
    #[serde(rename = "Type")]
    pub recovery_kind: String,
    pub recovery_type: String,
}

/// A recovery that was blocked by another, still recent, recovery
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BlockedTopologyRecovery {
    pub failed_instance_key: InstanceKey,
    pub cluster_name: String,
    pub analysis: String,
    pub blocking_recovery_id: i64,
    pub blocking_recovery: Option<Box<TopologyRecovery>>,
}

/// One audited step of a recovery
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RecoveryStep {
    #[serde(rename = "RecoveryUID")]
    pub recovery_uid: String,
    pub audit_at: String,
    pub message: String,
}

/// Cluster/instance pattern for which automated recovery is enabled
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AutomatedRecoveryFilter {
    pub pattern: String,
    pub is_promotion: bool,
}

impl From<String> for AutomatedRecoveryFilter {
    fn from(pattern: String) -> Self {
        Self {
            pattern,
            is_promotion: false,
        }
    }
}
