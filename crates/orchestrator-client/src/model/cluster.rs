// Cluster model types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::key::InstanceKey;

/// Summary information about a MySQL cluster
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ClusterInfo {
    pub cluster_name: String,
    pub cluster_alias: String,
    pub cluster_domain: String,
    pub count_instances: u64,
    pub heuristic_lag: i64,
    pub has_automated_master_recovery: bool,
    pub has_automated_intermediate_master_recovery: bool,
}

/// Instance keys grouped by pool name
pub type PoolInstancesMap = HashMap<String, Vec<InstanceKey>>;
