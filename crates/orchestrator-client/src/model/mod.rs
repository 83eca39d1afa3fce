// Model types for orchestrator API responses

pub mod agent;
pub mod audit;
pub mod cluster;
pub mod common;
pub mod instance;
pub mod key;
pub mod maintenance;
pub mod metrics;
pub mod raft;
pub mod recovery;
pub mod tag;

pub use agent::{Agent, AgentLogicalVolume, AgentSeed, AgentSeedState};
pub use audit::{AuditEntry, HostnameResolveCache};
pub use cluster::{ClusterInfo, PoolInstancesMap};
pub use common::NullInt64;
pub use instance::{
    BinlogCoordinates, BinlogType, CandidatePromotionRule, Instance, ReplicationThreadState,
};
pub use key::{InstanceKey, parse_instance_keys};
pub use maintenance::Maintenance;
pub use metrics::{BackendQueryMetric, DiscoveryMetric, DiscoveryQueueMetric, WriteBufferMetric};
pub use raft::{RaftFollowerHealthReport, RaftMembershipHealth, RaftState};
pub use recovery::{
    AutomatedRecoveryFilter, BlockedTopologyRecovery, RecoveryStep, ReplicationAnalysis,
    TopologyRecovery,
};
pub use tag::Tag;
