// Instance model types

use std::fmt;
use std::str::FromStr;

use orchestrator_http::ClientError;
use serde::{Deserialize, Serialize};

use super::common::{NullInt64, null_as_default};
use super::key::InstanceKey;

/// Kind of binary log a coordinate points into
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum BinlogType {
    #[default]
    BinaryLog,
    RelayLog,
}

impl From<i64> for BinlogType {
    fn from(value: i64) -> Self {
        match value {
            1 => Self::RelayLog,
            _ => Self::BinaryLog,
        }
    }
}

impl From<BinlogType> for i64 {
    fn from(value: BinlogType) -> Self {
        match value {
            BinlogType::BinaryLog => 0,
            BinlogType::RelayLog => 1,
        }
    }
}

/// State of a replication IO or SQL thread
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum ReplicationThreadState {
    #[default]
    NoThread,
    Stopped,
    Running,
    Other,
}

impl From<i64> for ReplicationThreadState {
    fn from(value: i64) -> Self {
        match value {
            0 => Self::NoThread,
            1 => Self::Stopped,
            2 => Self::Running,
            _ => Self::Other,
        }
    }
}

impl From<ReplicationThreadState> for i64 {
    fn from(value: ReplicationThreadState) -> Self {
        match value {
            ReplicationThreadState::NoThread => 0,
            ReplicationThreadState::Stopped => 1,
            ReplicationThreadState::Running => 2,
            ReplicationThreadState::Other => 3,
        }
    }
}

/// Promotion preference of an instance during failover
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CandidatePromotionRule {
    Must,
    Prefer,
    #[default]
    Neutral,
    PreferNot,
    MustNot,
    /// A rule this client does not know, kept verbatim
    Other(String),
}

impl CandidatePromotionRule {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Must => "must",
            Self::Prefer => "prefer",
            Self::Neutral => "neutral",
            Self::PreferNot => "prefer_not",
            Self::MustNot => "must_not",
            Self::Other(rule) => rule,
        }
    }
}

impl From<String> for CandidatePromotionRule {
    fn from(value: String) -> Self {
        match value.as_str() {
            "must" => Self::Must,
            "prefer" => Self::Prefer,
            "neutral" | "" => Self::Neutral,
            "prefer_not" => Self::PreferNot,
            "must_not" => Self::MustNot,
            _ => Self::Other(value),
        }
    }
}

impl From<CandidatePromotionRule> for String {
    fn from(value: CandidatePromotionRule) -> Self {
        match value {
            CandidatePromotionRule::Other(rule) => rule,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for CandidatePromotionRule {
    type Err = ClientError;

    /// Strict parse accepting only the known rules
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match CandidatePromotionRule::from(s.to_string()) {
            Self::Other(rule) => Err(ClientError::Config(format!(
                "unknown promotion rule: {rule}"
            ))),
            known => Ok(known),
        }
    }
}

impl fmt::Display for CandidatePromotionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binlog file and position
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BinlogCoordinates {
    pub log_file: String,
    pub log_pos: i64,
    #[serde(rename = "Type")]
    pub binlog_type: BinlogType,
}

impl fmt::Display for BinlogCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.log_file, self.log_pos)
    }
}

/// A database instance with its current configuration and replication status
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Instance {
    pub key: InstanceKey,
    pub instance_alias: String,
    pub uptime: u64,
    #[serde(rename = "ServerID")]
    pub server_id: u64,
    #[serde(rename = "ServerUUID")]
    pub server_uuid: String,
    pub version: String,
    pub version_comment: String,
    pub flavor_name: String,
    pub read_only: bool,
    #[serde(rename = "Binlog_format")]
    pub binlog_format: String,
    pub binlog_row_image: String,
    pub log_bin_enabled: bool,
    pub log_slave_updates_enabled: bool,
    pub log_replication_updates_enabled: bool,
    pub self_binlog_coordinates: BinlogCoordinates,
    pub master_key: InstanceKey,
    #[serde(rename = "MasterUUID")]
    pub master_uuid: String,
    #[serde(rename = "AncestryUUID")]
    pub ancestry_uuid: String,
    pub is_detached_master: bool,

    #[serde(rename = "Slave_SQL_Running")]
    pub slave_sql_running: bool,
    #[serde(rename = "ReplicationSQLThreadRuning")]
    pub replication_sql_thread_running: bool,
    #[serde(rename = "Slave_IO_Running")]
    pub slave_io_running: bool,
    #[serde(rename = "ReplicationIOThreadRuning")]
    pub replication_io_thread_running: bool,
    #[serde(rename = "ReplicationSQLThreadState")]
    pub replication_sql_thread_state: ReplicationThreadState,
    #[serde(rename = "ReplicationIOThreadState")]
    pub replication_io_thread_state: ReplicationThreadState,

    pub has_replication_filters: bool,
    #[serde(rename = "GTIDMode")]
    pub gtid_mode: String,
    #[serde(rename = "SupportsOracleGTID")]
    pub supports_oracle_gtid: bool,
    #[serde(rename = "UsingOracleGTID")]
    pub using_oracle_gtid: bool,
    #[serde(rename = "UsingMariaDBGTID")]
    pub using_mariadb_gtid: bool,
    #[serde(rename = "UsingPseudoGTID")]
    pub using_pseudo_gtid: bool,
    pub read_binlog_coordinates: BinlogCoordinates,
    pub exec_binlog_coordinates: BinlogCoordinates,
    pub is_detached: bool,
    pub relaylog_coordinates: BinlogCoordinates,
    #[serde(rename = "LastSQLError")]
    pub last_sql_error: String,
    #[serde(rename = "LastIOError")]
    pub last_io_error: String,
    pub seconds_behind_master: NullInt64,
    #[serde(rename = "SQLDelay")]
    pub sql_delay: u64,
    pub executed_gtid_set: String,
    pub gtid_purged: String,
    pub gtid_errant: String,

    pub slave_lag_seconds: NullInt64,
    pub replication_lag_seconds: NullInt64,
    #[serde(deserialize_with = "null_as_default")]
    pub slave_hosts: Vec<InstanceKey>,
    #[serde(deserialize_with = "null_as_default")]
    pub replicas: Vec<InstanceKey>,
    pub cluster_name: String,
    pub suggested_cluster_alias: String,
    pub data_center: String,
    pub region: String,
    pub physical_environment: String,
    pub replication_depth: u64,
    pub is_co_master: bool,
    pub has_replication_credentials: bool,
    pub replication_credentials_available: bool,
    pub semi_sync_available: bool,
    pub semi_sync_priority: u64,
    pub semi_sync_master_plugin_new_version: bool,
    pub semi_sync_replica_plugin_new_version: bool,
    pub semi_sync_master_enabled: bool,
    pub semi_sync_replica_enabled: bool,
    pub semi_sync_master_timeout: u64,
    pub semi_sync_master_wait_for_replica_count: u64,
    pub semi_sync_master_status: bool,
    pub semi_sync_master_clients: u64,
    pub semi_sync_replica_status: bool,

    pub last_seen_timestamp: String,
    pub is_last_check_valid: bool,
    pub is_up_to_date: bool,
    pub is_recently_checked: bool,
    pub seconds_since_last_seen: NullInt64,
    #[serde(rename = "CountMySQLSnapshots")]
    pub count_mysql_snapshots: i64,

    pub is_candidate: bool,
    pub promotion_rule: CandidatePromotionRule,
    pub is_downtimed: bool,
    pub downtime_reason: String,
    pub downtime_owner: String,
    pub downtime_end_timestamp: String,
    /// Nanoseconds
    pub elapsed_downtime: i64,
    pub unresolved_hostname: String,
    #[serde(rename = "AllowTLS")]
    pub allow_tls: bool,

    #[serde(deserialize_with = "null_as_default")]
    pub problems: Vec<String>,

    /// Nanoseconds
    pub last_discovery_latency: i64,

    pub replication_group_name: String,
    pub replication_group_is_single_primary: bool,
    pub replication_group_member_state: String,
    pub replication_group_member_role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub replication_group_members: Vec<InstanceKey>,
    pub replication_group_primary_instance_key: InstanceKey,
}

impl Instance {
    /// Replication lag, preferring the current field over the legacy one
    pub fn lag_seconds(&self) -> Option<i64> {
        self.replication_lag_seconds
            .value()
            .or_else(|| self.slave_lag_seconds.value())
    }

    pub fn is_replica(&self) -> bool {
        !self.master_key.is_empty()
    }

    pub fn is_replicating(&self) -> bool {
        (self.replication_sql_thread_running || self.slave_sql_running)
            && (self.replication_io_thread_running || self.slave_io_running)
    }
}
