// Raft model types

use serde::{Deserialize, Serialize};

use super::common::null_as_default;

/// Raft view of the orchestrator node that answered
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RaftState {
    pub leader: String,
    pub peer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub peers: Vec<String>,
    pub is_leader: bool,
    pub is_follower: bool,
    pub state: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RaftMembershipHealth {
    pub healthy: bool,
    pub reason: String,
}

/// Health report a follower submits to the leader
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RaftFollowerHealthReport {
    pub hostname: String,
    pub token: String,
    pub raft_bind: String,
    pub raft_advertise: String,
    pub is_available: bool,
    pub availability_reason: String,
}
