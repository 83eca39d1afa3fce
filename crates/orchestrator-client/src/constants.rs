// Orchestrator API endpoint names, relative to the `/api` root

pub mod api_path {
    // Health / leadership
    pub const HEALTH: &str = "health";
    pub const LB_CHECK: &str = "lb-check";
    pub const PING: &str = "_ping";
    pub const LEADER_CHECK: &str = "leader-check";
    pub const STATUS: &str = "status";
    pub const HEADERS: &str = "headers";
    pub const RELOAD_CONFIGURATION: &str = "reload-configuration";

    // Instance
    pub const INSTANCE: &str = "instance";
    pub const INSTANCE_REPLICAS: &str = "instance-replicas";
    pub const DISCOVER: &str = "discover";
    pub const ASYNC_DISCOVER: &str = "async-discover";
    pub const REFRESH: &str = "refresh";
    pub const FORGET: &str = "forget";
    pub const FORGET_CLUSTER: &str = "forget-cluster";
    pub const ALL_INSTANCES: &str = "all-instances";
    pub const RESOLVE: &str = "resolve";
    pub const SET_READ_ONLY: &str = "set-read-only";
    pub const SET_WRITEABLE: &str = "set-writeable";
    pub const KILL_QUERY: &str = "kill-query";
    pub const SEARCH: &str = "search";
    pub const BULK_INSTANCES: &str = "bulk-instances";
    pub const PROBLEMS: &str = "problems";

    // Cluster
    pub const CLUSTER: &str = "cluster";
    pub const CLUSTER_BY_ALIAS: &str = "cluster/alias";
    pub const CLUSTER_BY_INSTANCE: &str = "cluster/instance";
    pub const CLUSTER_INFO: &str = "cluster-info";
    pub const CLUSTER_INFO_BY_ALIAS: &str = "cluster-info/alias";
    pub const CLUSTER_OSC_REPLICAS: &str = "cluster-osc-replicas";
    pub const SET_CLUSTER_ALIAS: &str = "set-cluster-alias";
    pub const CLUSTERS: &str = "clusters";
    pub const CLUSTERS_INFO: &str = "clusters-info";
    pub const MASTER: &str = "master";
    pub const MASTERS: &str = "masters";
    pub const RELOAD_CLUSTER_ALIAS: &str = "reload-cluster-alias";

    // Topology / relocation
    pub const RELOCATE: &str = "relocate";
    pub const RELOCATE_BELOW: &str = "relocate-below";
    pub const RELOCATE_REPLICAS: &str = "relocate-replicas";
    pub const REGROUP_REPLICAS: &str = "regroup-replicas";
    pub const MOVE_UP: &str = "move-up";
    pub const MOVE_UP_REPLICAS: &str = "move-up-replicas";
    pub const MOVE_BELOW: &str = "move-below";
    pub const MOVE_EQUIVALENT: &str = "move-equivalent";
    pub const REPOINT: &str = "repoint";
    pub const REPOINT_REPLICAS: &str = "repoint-replicas";
    pub const MAKE_CO_MASTER: &str = "make-co-master";
    pub const TAKE_SIBLINGS: &str = "take-siblings";
    pub const TAKE_MASTER: &str = "take-master";
    pub const MASTER_EQUIVALENT: &str = "master-equivalent";
    pub const REGROUP_REPLICAS_BLS: &str = "regroup-replicas-bls";
    pub const MOVE_BELOW_GTID: &str = "move-below-gtid";
    pub const MOVE_REPLICAS_GTID: &str = "move-replicas-gtid";
    pub const REGROUP_REPLICAS_GTID: &str = "regroup-replicas-gtid";
    pub const MATCH: &str = "match";
    pub const MATCH_BELOW: &str = "match-below";
    pub const MATCH_UP: &str = "match-up";
    pub const MATCH_REPLICAS: &str = "match-replicas";
    pub const MATCH_UP_REPLICAS: &str = "match-up-replicas";
    pub const REGROUP_REPLICAS_PGTID: &str = "regroup-replicas-pgtid";
    pub const CAN_REPLICATE_FROM: &str = "can-replicate-from";
    pub const CAN_REPLICATE_FROM_GTID: &str = "can-replicate-from-gtid";
    pub const LAST_PSEUDO_GTID: &str = "last-pseudo-gtid";
    pub const TOPOLOGY: &str = "topology";
    pub const TOPOLOGY_TABULATED: &str = "topology-tabulated";
    pub const TOPOLOGY_TAGS: &str = "topology-tags";
    pub const SNAPSHOT_TOPOLOGIES: &str = "snapshot-topologies";

    // Replication control
    pub const START_REPLICA: &str = "start-replica";
    pub const RESTART_REPLICA: &str = "restart-replica";
    pub const STOP_REPLICA: &str = "stop-replica";
    pub const STOP_REPLICA_NICE: &str = "stop-replica-nice";
    pub const RESET_REPLICA: &str = "reset-replica";
    pub const DETACH_REPLICA: &str = "detach-replica";
    pub const REATTACH_REPLICA: &str = "reattach-replica";
    pub const DETACH_REPLICA_MASTER_HOST: &str = "detach-replica-master-host";
    pub const REATTACH_REPLICA_MASTER_HOST: &str = "reattach-replica-master-host";
    pub const SKIP_QUERY: &str = "skip-query";
    pub const FLUSH_BINARY_LOGS: &str = "flush-binary-logs";
    pub const PURGE_BINARY_LOGS: &str = "purge-binary-logs";
    pub const RESTART_REPLICA_STATEMENTS: &str = "restart-replica-statements";
    pub const DELAY_REPLICATION: &str = "delay-replication";
    pub const ENABLE_SEMI_SYNC_MASTER: &str = "enable-semi-sync-master";
    pub const DISABLE_SEMI_SYNC_MASTER: &str = "disable-semi-sync-master";
    pub const ENABLE_SEMI_SYNC_REPLICA: &str = "enable-semi-sync-replica";
    pub const DISABLE_SEMI_SYNC_REPLICA: &str = "disable-semi-sync-replica";

    // GTID
    pub const ENABLE_GTID: &str = "enable-gtid";
    pub const DISABLE_GTID: &str = "disable-gtid";
    pub const LOCATE_GTID_ERRANT: &str = "locate-gtid-errant";
    pub const GTID_ERRANT_RESET_MASTER: &str = "gtid-errant-reset-master";
    pub const GTID_ERRANT_INJECT_EMPTY: &str = "gtid-errant-inject-empty";

    // Recovery
    pub const REPLICATION_ANALYSIS: &str = "replication-analysis";
    pub const REPLICATION_ANALYSIS_INSTANCE: &str = "replication-analysis/instance";
    pub const REPLICATION_ANALYSIS_CHANGELOG: &str = "replication-analysis-changelog";
    pub const RECOVER: &str = "recover";
    pub const RECOVER_LITE: &str = "recover-lite";
    pub const GRACEFUL_MASTER_TAKEOVER: &str = "graceful-master-takeover";
    pub const GRACEFUL_MASTER_TAKEOVER_AUTO: &str = "graceful-master-takeover-auto";
    pub const FORCE_MASTER_FAILOVER: &str = "force-master-failover";
    pub const FORCE_MASTER_TAKEOVER: &str = "force-master-takeover";
    pub const REGISTER_CANDIDATE: &str = "register-candidate";
    pub const AUTOMATED_RECOVERY_FILTERS: &str = "automated-recovery-filters";
    pub const AUDIT_FAILURE_DETECTION: &str = "audit-failure-detection";
    pub const AUDIT_FAILURE_DETECTION_BY_ID: &str = "audit-failure-detection/id";
    pub const AUDIT_FAILURE_DETECTION_BY_ALIAS: &str = "audit-failure-detection/alias";
    pub const AUDIT_RECOVERY: &str = "audit-recovery";
    pub const AUDIT_RECOVERY_BY_ID: &str = "audit-recovery/id";
    pub const AUDIT_RECOVERY_BY_UID: &str = "audit-recovery/uid";
    pub const AUDIT_RECOVERY_BY_CLUSTER: &str = "audit-recovery/cluster";
    pub const AUDIT_RECOVERY_BY_ALIAS: &str = "audit-recovery/alias";
    pub const AUDIT_RECOVERY_STEPS: &str = "audit-recovery-steps";
    pub const ACTIVE_CLUSTER_RECOVERY: &str = "active-cluster-recovery";
    pub const RECENTLY_ACTIVE_CLUSTER_RECOVERY: &str = "recently-active-cluster-recovery";
    pub const RECENTLY_ACTIVE_INSTANCE_RECOVERY: &str = "recently-active-instance-recovery";
    pub const ACK_RECOVERY: &str = "ack-recovery";
    pub const ACK_RECOVERY_CLUSTER: &str = "ack-recovery/cluster";
    pub const ACK_RECOVERY_CLUSTER_ALIAS: &str = "ack-recovery/cluster/alias";
    pub const ACK_RECOVERY_INSTANCE: &str = "ack-recovery/instance";
    pub const ACK_RECOVERY_UID: &str = "ack-recovery/uid";
    pub const ACK_ALL_RECOVERIES: &str = "ack-all-recoveries";
    pub const BLOCKED_RECOVERIES: &str = "blocked-recoveries";
    pub const BLOCKED_RECOVERIES_BY_CLUSTER: &str = "blocked-recoveries/cluster";
    pub const DISABLE_GLOBAL_RECOVERIES: &str = "disable-global-recoveries";
    pub const ENABLE_GLOBAL_RECOVERIES: &str = "enable-global-recoveries";
    pub const CHECK_GLOBAL_RECOVERIES: &str = "check-global-recoveries";

    // Maintenance / downtime
    pub const BEGIN_MAINTENANCE: &str = "begin-maintenance";
    pub const END_MAINTENANCE: &str = "end-maintenance";
    pub const IN_MAINTENANCE: &str = "in-maintenance";
    pub const MAINTENANCE: &str = "maintenance";
    pub const BEGIN_DOWNTIME: &str = "begin-downtime";
    pub const END_DOWNTIME: &str = "end-downtime";
    pub const DOWNTIMED: &str = "downtimed";

    // Tagging
    pub const TAGGED: &str = "tagged";
    pub const TAGS: &str = "tags";
    pub const TAG_VALUE: &str = "tag-value";
    pub const TAG: &str = "tag";
    pub const UNTAG: &str = "untag";
    pub const UNTAG_ALL: &str = "untag-all";

    // Agents
    pub const AGENTS: &str = "agents";
    pub const AGENT: &str = "agent";
    pub const AGENT_UMOUNT: &str = "agent-umount";
    pub const AGENT_MOUNT: &str = "agent-mount";
    pub const AGENT_CREATE_SNAPSHOT: &str = "agent-create-snapshot";
    pub const AGENT_REMOVE_LV: &str = "agent-removelv";
    pub const AGENT_MYSQL_STOP: &str = "agent-mysql-stop";
    pub const AGENT_MYSQL_START: &str = "agent-mysql-start";
    pub const AGENT_SEED: &str = "agent-seed";
    pub const AGENT_ACTIVE_SEEDS: &str = "agent-active-seeds";
    pub const AGENT_RECENT_SEEDS: &str = "agent-recent-seeds";
    pub const AGENT_SEED_DETAILS: &str = "agent-seed-details";
    pub const AGENT_SEED_STATES: &str = "agent-seed-states";
    pub const AGENT_ABORT_SEED: &str = "agent-abort-seed";
    pub const AGENT_CUSTOM_COMMAND: &str = "agent-custom-command";
    pub const SEEDS: &str = "seeds";

    // Raft
    pub const GRAB_ELECTION: &str = "grab-election";
    pub const RAFT_ADD_PEER: &str = "raft-add-peer";
    pub const RAFT_REMOVE_PEER: &str = "raft-remove-peer";
    pub const RAFT_YIELD: &str = "raft-yield";
    pub const RAFT_YIELD_HINT: &str = "raft-yield-hint";
    pub const RAFT_PEERS: &str = "raft-peers";
    pub const RAFT_STATE: &str = "raft-state";
    pub const RAFT_LEADER: &str = "raft-leader";
    pub const RAFT_HEALTH: &str = "raft-health";
    pub const RAFT_STATUS: &str = "raft-status";
    pub const RAFT_SNAPSHOT: &str = "raft-snapshot";
    pub const RAFT_FOLLOWER_HEALTH_REPORT: &str = "raft-follower-health-report";
    pub const REELECT: &str = "reelect";

    // Pools / KV stores
    pub const SUBMIT_POOL_INSTANCES: &str = "submit-pool-instances";
    pub const CLUSTER_POOL_INSTANCES: &str = "cluster-pool-instances";
    pub const HEURISTIC_CLUSTER_POOL_INSTANCES: &str = "heuristic-cluster-pool-instances";
    pub const HEURISTIC_CLUSTER_POOL_LAG: &str = "heuristic-cluster-pool-lag";
    pub const SUBMIT_MASTERS_TO_KV_STORES: &str = "submit-masters-to-kv-stores";

    // Audit / hostnames / promotion rules
    pub const AUDIT: &str = "audit";
    pub const AUDIT_INSTANCE: &str = "audit/instance";
    pub const HOSTNAME_RESOLVE_CACHE: &str = "hostname-resolve-cache";
    pub const RESET_HOSTNAME_RESOLVE_CACHE: &str = "reset-hostname-resolve-cache";
    pub const REGISTER_HOSTNAME_UNRESOLVE: &str = "register-hostname-unresolve";
    pub const DEREGISTER_HOSTNAME_UNRESOLVE: &str = "deregister-hostname-unresolve";
    pub const BULK_PROMOTION_RULES: &str = "bulk-promotion-rules";

    // Monitoring
    pub const DISCOVERY_METRICS_RAW: &str = "discovery-metrics-raw";
    pub const DISCOVERY_METRICS_AGGREGATED: &str = "discovery-metrics-aggregated";
    pub const DISCOVERY_QUEUE_METRICS_RAW: &str = "discovery-queue-metrics-raw";
    pub const DISCOVERY_QUEUE_METRICS_AGGREGATED: &str = "discovery-queue-metrics-aggregated";
    pub const BACKEND_QUERY_METRICS_RAW: &str = "backend-query-metrics-raw";
    pub const BACKEND_QUERY_METRICS_AGGREGATED: &str = "backend-query-metrics-aggregated";
    pub const WRITE_BUFFER_METRICS_RAW: &str = "write-buffer-metrics-raw";
    pub const WRITE_BUFFER_METRICS_AGGREGATED: &str = "write-buffer-metrics-aggregated";
}

/// Environment variables read by `OrchestratorClientConfig::from_env`
pub mod env {
    pub const API: &str = "ORCHESTRATOR_API";
    pub const USER: &str = "ORCHESTRATOR_USER";
    pub const PASSWORD: &str = "ORCHESTRATOR_PASSWORD";
    pub const TIMEOUT_SECS: &str = "ORCHESTRATOR_TIMEOUT_SECS";
    pub const INSECURE: &str = "ORCHESTRATOR_INSECURE";
    pub const URL_PREFIX: &str = "ORCHESTRATOR_URL_PREFIX";
}
