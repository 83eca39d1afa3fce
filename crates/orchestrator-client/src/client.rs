// OrchestratorClient - facade for all orchestrator API operations

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use orchestrator_http::{
    ApiPath, ApiResponse, ClientError, OrchestratorHttpClient, RequestContext, RequestMetrics,
    Result,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    config::OrchestratorClientConfig,
    constants::api_path,
    model::{
        Agent, AgentSeed, AgentSeedState, AuditEntry, AutomatedRecoveryFilter,
        BackendQueryMetric, BlockedTopologyRecovery, CandidatePromotionRule, ClusterInfo,
        DiscoveryMetric, DiscoveryQueueMetric, HostnameResolveCache, Instance, InstanceKey,
        Maintenance, PoolInstancesMap, RaftMembershipHealth, RaftState, RecoveryStep,
        ReplicationAnalysis, Tag, TopologyRecovery, WriteBufferMetric, parse_instance_keys,
    },
};

/// Adds instance keys to a path as `{hostname}/{port}`
trait InstancePath {
    fn instance(self, key: &InstanceKey) -> Self;
}

impl InstancePath for ApiPath {
    fn instance(self, key: &InstanceKey) -> Self {
        self.segment(&key.hostname).segment(key.port)
    }
}

/// Duration segment understood by orchestrator, e.g. `3600s`
fn duration_segment(duration: Duration) -> String {
    format!("{}s", duration.as_secs())
}

#[derive(Serialize)]
struct CommentBody<'a> {
    comment: &'a str,
}

#[derive(Serialize)]
struct AliasBody<'a> {
    alias: &'a str,
}

/// Typed client for the orchestrator REST API
pub struct OrchestratorClient {
    http_client: OrchestratorHttpClient,
}

impl OrchestratorClient {
    /// Create a new client and pin the leader among the configured endpoints
    pub async fn new(config: OrchestratorClientConfig) -> Result<Self> {
        let http_client = OrchestratorHttpClient::new(config.http_config()).await?;
        debug!("Orchestrator client pinned to {:?}", http_client.leader());
        Ok(Self { http_client })
    }

    /// Create a new client for a single orchestrator
    pub async fn from_base_url(base_url: &str) -> Result<Self> {
        Self::new(OrchestratorClientConfig::new(base_url)).await
    }

    /// Wrap an already configured transport
    pub fn from_http_client(http_client: OrchestratorHttpClient) -> Self {
        Self { http_client }
    }

    /// Record request metrics on `metrics`
    pub fn with_metrics(mut self, metrics: Arc<RequestMetrics>) -> Self {
        self.http_client = self.http_client.with_metrics(metrics);
        self
    }

    pub fn http_client(&self) -> &OrchestratorHttpClient {
        &self.http_client
    }

    /// The pinned leader URL, `None` until one has been resolved
    pub fn leader(&self) -> Option<String> {
        self.http_client.leader()
    }

    /// Probe the endpoints again and pin the current leader
    pub async fn refresh_leader(&self) -> Result<String> {
        self.http_client.refresh_leader().await
    }

    async fn get(&self, ctx: &RequestContext, path: ApiPath) -> Result<ApiResponse> {
        self.http_client.get(ctx, &path).await
    }

    /// Single record; missing details are an error
    async fn fetch<T: DeserializeOwned>(&self, ctx: &RequestContext, path: ApiPath) -> Result<T> {
        self.get(ctx, path).await?.into_details()
    }

    /// Collection; missing details decode as empty
    async fn fetch_all<T>(&self, ctx: &RequestContext, path: ApiPath) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        self.get(ctx, path).await?.into_collection()
    }

    /// Fire an operation whose details are not interesting
    async fn execute(&self, ctx: &RequestContext, path: ApiPath) -> Result<()> {
        self.get(ctx, path).await.map(|_| ())
    }

    async fn fetch_bool(&self, ctx: &RequestContext, path: ApiPath) -> Result<bool> {
        self.get(ctx, path).await?.details_as_bool()
    }

    async fn fetch_string(&self, ctx: &RequestContext, path: ApiPath) -> Result<String> {
        Ok(self.get(ctx, path).await?.details_as_string())
    }

    async fn fetch_i64(&self, ctx: &RequestContext, path: ApiPath) -> Result<i64> {
        self.get(ctx, path).await?.details_as_i64()
    }

    /// Details sent as `host:port` strings; unparseable entries are skipped
    async fn fetch_keys(&self, ctx: &RequestContext, path: ApiPath) -> Result<Vec<InstanceKey>> {
        let raw: Vec<String> = self.fetch_all(ctx, path).await?;
        Ok(parse_instance_keys(raw))
    }

    /// Plain text endpoints; an envelope body is unwrapped
    async fn fetch_text(&self, ctx: &RequestContext, path: ApiPath) -> Result<String> {
        let text = self.http_client.get_text(ctx, &path).await?;
        match ApiResponse::parse(text.as_bytes()) {
            Some(envelope) => {
                if !self.http_client.config().code_convention.is_success(&envelope.code) {
                    return Err(ClientError::Api {
                        message: envelope.message,
                    });
                }
                Ok(envelope.details_as_string())
            }
            None => Ok(text),
        }
    }

    async fn post<B, T>(&self, ctx: &RequestContext, path: ApiPath, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.http_client.post_json(ctx, &path, body).await?.into_details()
    }

    async fn post_all<B, T>(&self, ctx: &RequestContext, path: ApiPath, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        self.http_client
            .post_json(ctx, &path, body)
            .await?
            .into_collection()
    }

    // ============================================================================
    // Health / Leader APIs
    // ============================================================================

    pub async fn health(&self, ctx: &RequestContext) -> Result<()> {
        self.execute(ctx, ApiPath::new(api_path::HEALTH)).await
    }

    pub async fn lb_check(&self, ctx: &RequestContext) -> Result<()> {
        self.execute(ctx, ApiPath::new(api_path::LB_CHECK)).await
    }

    pub async fn ping(&self, ctx: &RequestContext) -> Result<()> {
        self.execute(ctx, ApiPath::new(api_path::PING)).await
    }

    /// Fails unless the pinned node is the leader
    pub async fn leader_check(&self, ctx: &RequestContext) -> Result<()> {
        self.execute(ctx, ApiPath::new(api_path::LEADER_CHECK)).await
    }

    /// Leader check where the server answers non-leaders with `error_status_code`
    pub async fn leader_check_with_status(
        &self,
        ctx: &RequestContext,
        error_status_code: u16,
    ) -> Result<()> {
        let path = ApiPath::new(api_path::LEADER_CHECK).segment(error_status_code);
        self.execute(ctx, path).await
    }

    pub async fn status(
        &self,
        ctx: &RequestContext,
    ) -> Result<serde_json::Map<String, serde_json::Value>> {
        self.fetch_all(ctx, ApiPath::new(api_path::STATUS)).await
    }

    /// Request headers as seen by the server
    pub async fn headers(&self, ctx: &RequestContext) -> Result<HashMap<String, Vec<String>>> {
        self.fetch_all(ctx, ApiPath::new(api_path::HEADERS)).await
    }

    pub async fn reload_configuration(&self, ctx: &RequestContext) -> Result<()> {
        self.execute(ctx, ApiPath::new(api_path::RELOAD_CONFIGURATION))
            .await
    }

    // ============================================================================
    // Instance APIs
    // ============================================================================

    pub async fn instance(&self, ctx: &RequestContext, key: &InstanceKey) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::INSTANCE).instance(key))
            .await
    }

    pub async fn instance_replicas(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<Vec<Instance>> {
        self.fetch_all(ctx, ApiPath::new(api_path::INSTANCE_REPLICAS).instance(key))
            .await
    }

    pub async fn discover(&self, ctx: &RequestContext, key: &InstanceKey) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::DISCOVER).instance(key))
            .await
    }

    /// Queue discovery without waiting for it
    pub async fn async_discover(&self, ctx: &RequestContext, key: &InstanceKey) -> Result<()> {
        self.execute(ctx, ApiPath::new(api_path::ASYNC_DISCOVER).instance(key))
            .await
    }

    pub async fn refresh(&self, ctx: &RequestContext, key: &InstanceKey) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::REFRESH).instance(key))
            .await
    }

    pub async fn forget(&self, ctx: &RequestContext, key: &InstanceKey) -> Result<()> {
        self.execute(ctx, ApiPath::new(api_path::FORGET).instance(key))
            .await
    }

    pub async fn forget_cluster(&self, ctx: &RequestContext, cluster_hint: &str) -> Result<()> {
        self.execute(ctx, ApiPath::new(api_path::FORGET_CLUSTER).segment(cluster_hint))
            .await
    }

    pub async fn all_instances(&self, ctx: &RequestContext) -> Result<Vec<Instance>> {
        self.fetch_all(ctx, ApiPath::new(api_path::ALL_INSTANCES)).await
    }

    pub async fn resolve(&self, ctx: &RequestContext, key: &InstanceKey) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::RESOLVE).instance(key))
            .await
    }

    pub async fn set_read_only(&self, ctx: &RequestContext, key: &InstanceKey) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::SET_READ_ONLY).instance(key))
            .await
    }

    pub async fn set_writeable(&self, ctx: &RequestContext, key: &InstanceKey) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::SET_WRITEABLE).instance(key))
            .await
    }

    pub async fn kill_query(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        process_id: i64,
    ) -> Result<Instance> {
        let path = ApiPath::new(api_path::KILL_QUERY)
            .instance(key)
            .segment(process_id);
        self.fetch(ctx, path).await
    }

    pub async fn search(&self, ctx: &RequestContext, term: &str) -> Result<Vec<Instance>> {
        self.fetch_all(ctx, ApiPath::new(api_path::SEARCH).segment(term))
            .await
    }

    pub async fn search_all(&self, ctx: &RequestContext) -> Result<Vec<Instance>> {
        self.fetch_all(ctx, ApiPath::new(api_path::SEARCH)).await
    }

    /// Fetch several instances in one request
    pub async fn bulk_instances(
        &self,
        ctx: &RequestContext,
        keys: &[InstanceKey],
    ) -> Result<Vec<Instance>> {
        self.post_all(ctx, ApiPath::new(api_path::BULK_INSTANCES), keys)
            .await
    }

    pub async fn problems(&self, ctx: &RequestContext) -> Result<Vec<Instance>> {
        self.fetch_all(ctx, ApiPath::new(api_path::PROBLEMS)).await
    }

    pub async fn cluster_problems(
        &self,
        ctx: &RequestContext,
        cluster_name: &str,
    ) -> Result<Vec<Instance>> {
        self.fetch_all(ctx, ApiPath::new(api_path::PROBLEMS).segment(cluster_name))
            .await
    }

    // ============================================================================
    // Cluster APIs
    // ============================================================================

    pub async fn cluster(&self, ctx: &RequestContext, cluster_hint: &str) -> Result<Vec<Instance>> {
        self.fetch_all(ctx, ApiPath::new(api_path::CLUSTER).segment(cluster_hint))
            .await
    }

    pub async fn cluster_by_alias(
        &self,
        ctx: &RequestContext,
        cluster_alias: &str,
    ) -> Result<Vec<Instance>> {
        self.fetch_all(ctx, ApiPath::new(api_path::CLUSTER_BY_ALIAS).segment(cluster_alias))
            .await
    }

    pub async fn cluster_by_instance(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<Vec<Instance>> {
        self.fetch_all(ctx, ApiPath::new(api_path::CLUSTER_BY_INSTANCE).instance(key))
            .await
    }

    pub async fn cluster_info(&self, ctx: &RequestContext, cluster_hint: &str) -> Result<ClusterInfo> {
        self.fetch(ctx, ApiPath::new(api_path::CLUSTER_INFO).segment(cluster_hint))
            .await
    }

    pub async fn cluster_info_by_alias(
        &self,
        ctx: &RequestContext,
        cluster_alias: &str,
    ) -> Result<ClusterInfo> {
        self.fetch(ctx, ApiPath::new(api_path::CLUSTER_INFO_BY_ALIAS).segment(cluster_alias))
            .await
    }

    /// Replicas suitable for online schema change
    pub async fn cluster_osc_replicas(
        &self,
        ctx: &RequestContext,
        cluster_hint: &str,
    ) -> Result<Vec<Instance>> {
        self.fetch_all(ctx, ApiPath::new(api_path::CLUSTER_OSC_REPLICAS).segment(cluster_hint))
            .await
    }

    pub async fn set_cluster_alias(
        &self,
        ctx: &RequestContext,
        cluster_name: &str,
        alias: &str,
    ) -> Result<()> {
        let path = ApiPath::new(api_path::SET_CLUSTER_ALIAS).segment(cluster_name);
        self.http_client
            .post_json(ctx, &path, &AliasBody { alias })
            .await
            .map(|_| ())
    }

    pub async fn clusters(&self, ctx: &RequestContext) -> Result<Vec<String>> {
        self.fetch_all(ctx, ApiPath::new(api_path::CLUSTERS)).await
    }

    pub async fn clusters_info(&self, ctx: &RequestContext) -> Result<Vec<ClusterInfo>> {
        self.fetch_all(ctx, ApiPath::new(api_path::CLUSTERS_INFO)).await
    }

    pub async fn cluster_master(&self, ctx: &RequestContext, cluster_hint: &str) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::MASTER).segment(cluster_hint))
            .await
    }

    pub async fn masters(&self, ctx: &RequestContext) -> Result<Vec<Instance>> {
        self.fetch_all(ctx, ApiPath::new(api_path::MASTERS)).await
    }

    pub async fn reload_cluster_alias(&self, ctx: &RequestContext) -> Result<()> {
        self.execute(ctx, ApiPath::new(api_path::RELOAD_CLUSTER_ALIAS))
            .await
    }

    // ============================================================================
    // Topology / Relocation APIs
    // ============================================================================

    async fn move_instance(
        &self,
        ctx: &RequestContext,
        endpoint: &str,
        key: &InstanceKey,
        target: &InstanceKey,
    ) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(endpoint).instance(key).instance(target))
            .await
    }

    async fn move_replicas(
        &self,
        ctx: &RequestContext,
        endpoint: &str,
        key: &InstanceKey,
        target: &InstanceKey,
    ) -> Result<Vec<Instance>> {
        self.fetch_all(ctx, ApiPath::new(endpoint).instance(key).instance(target))
            .await
    }

    pub async fn relocate(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        below: &InstanceKey,
    ) -> Result<Instance> {
        self.move_instance(ctx, api_path::RELOCATE, key, below).await
    }

    pub async fn relocate_below(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        below: &InstanceKey,
    ) -> Result<Instance> {
        self.move_instance(ctx, api_path::RELOCATE_BELOW, key, below)
            .await
    }

    pub async fn relocate_replicas(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        below: &InstanceKey,
    ) -> Result<Vec<Instance>> {
        self.move_replicas(ctx, api_path::RELOCATE_REPLICAS, key, below)
            .await
    }

    pub async fn regroup_replicas(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<Vec<Instance>> {
        self.fetch_all(ctx, ApiPath::new(api_path::REGROUP_REPLICAS).instance(key))
            .await
    }

    pub async fn move_up(&self, ctx: &RequestContext, key: &InstanceKey) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::MOVE_UP).instance(key))
            .await
    }

    pub async fn move_up_replicas(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<Vec<Instance>> {
        self.fetch_all(ctx, ApiPath::new(api_path::MOVE_UP_REPLICAS).instance(key))
            .await
    }

    pub async fn move_below(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        sibling: &InstanceKey,
    ) -> Result<Instance> {
        self.move_instance(ctx, api_path::MOVE_BELOW, key, sibling)
            .await
    }

    pub async fn move_equivalent(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        below: &InstanceKey,
    ) -> Result<Instance> {
        self.move_instance(ctx, api_path::MOVE_EQUIVALENT, key, below)
            .await
    }

    pub async fn repoint(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        below: &InstanceKey,
    ) -> Result<Instance> {
        self.move_instance(ctx, api_path::REPOINT, key, below).await
    }

    pub async fn repoint_replicas(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<Vec<Instance>> {
        self.fetch_all(ctx, ApiPath::new(api_path::REPOINT_REPLICAS).instance(key))
            .await
    }

    pub async fn make_co_master(&self, ctx: &RequestContext, key: &InstanceKey) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::MAKE_CO_MASTER).instance(key))
            .await
    }

    pub async fn take_siblings(&self, ctx: &RequestContext, key: &InstanceKey) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::TAKE_SIBLINGS).instance(key))
            .await
    }

    pub async fn take_master(&self, ctx: &RequestContext, key: &InstanceKey) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::TAKE_MASTER).instance(key))
            .await
    }

    /// Instance equivalent to the given master binlog coordinates
    pub async fn master_equivalent(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        log_file: &str,
        log_pos: i64,
    ) -> Result<Instance> {
        let path = ApiPath::new(api_path::MASTER_EQUIVALENT)
            .instance(key)
            .segment(log_file)
            .segment(log_pos);
        self.fetch(ctx, path).await
    }

    pub async fn regroup_replicas_bls(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<Vec<Instance>> {
        self.fetch_all(ctx, ApiPath::new(api_path::REGROUP_REPLICAS_BLS).instance(key))
            .await
    }

    pub async fn move_below_gtid(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        below: &InstanceKey,
    ) -> Result<Instance> {
        self.move_instance(ctx, api_path::MOVE_BELOW_GTID, key, below)
            .await
    }

    pub async fn move_replicas_gtid(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        below: &InstanceKey,
    ) -> Result<Vec<Instance>> {
        self.move_replicas(ctx, api_path::MOVE_REPLICAS_GTID, key, below)
            .await
    }

    pub async fn regroup_replicas_gtid(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<Vec<Instance>> {
        self.fetch_all(ctx, ApiPath::new(api_path::REGROUP_REPLICAS_GTID).instance(key))
            .await
    }

    /// Pseudo-GTID match of `key` below `below`
    pub async fn match_instance(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        below: &InstanceKey,
    ) -> Result<Instance> {
        self.move_instance(ctx, api_path::MATCH, key, below).await
    }

    pub async fn match_below(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        below: &InstanceKey,
    ) -> Result<Instance> {
        self.move_instance(ctx, api_path::MATCH_BELOW, key, below)
            .await
    }

    pub async fn match_up(&self, ctx: &RequestContext, key: &InstanceKey) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::MATCH_UP).instance(key))
            .await
    }

    pub async fn match_replicas(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        below: &InstanceKey,
    ) -> Result<Vec<Instance>> {
        self.move_replicas(ctx, api_path::MATCH_REPLICAS, key, below)
            .await
    }

    pub async fn match_up_replicas(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<Vec<Instance>> {
        self.fetch_all(ctx, ApiPath::new(api_path::MATCH_UP_REPLICAS).instance(key))
            .await
    }

    pub async fn regroup_replicas_pgtid(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<Vec<Instance>> {
        self.fetch_all(ctx, ApiPath::new(api_path::REGROUP_REPLICAS_PGTID).instance(key))
            .await
    }

    pub async fn can_replicate_from(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        from: &InstanceKey,
    ) -> Result<Instance> {
        self.move_instance(ctx, api_path::CAN_REPLICATE_FROM, key, from)
            .await
    }

    pub async fn can_replicate_from_gtid(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        from: &InstanceKey,
    ) -> Result<Instance> {
        self.move_instance(ctx, api_path::CAN_REPLICATE_FROM_GTID, key, from)
            .await
    }

    pub async fn last_pseudo_gtid(&self, ctx: &RequestContext, key: &InstanceKey) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::LAST_PSEUDO_GTID).instance(key))
            .await
    }

    /// ASCII rendering of a cluster topology
    pub async fn topology(&self, ctx: &RequestContext, cluster_hint: &str) -> Result<String> {
        self.fetch_text(ctx, ApiPath::new(api_path::TOPOLOGY).segment(cluster_hint))
            .await
    }

    pub async fn topology_from_instance(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<String> {
        self.fetch_text(ctx, ApiPath::new(api_path::TOPOLOGY).instance(key))
            .await
    }

    pub async fn topology_tabulated(
        &self,
        ctx: &RequestContext,
        cluster_hint: &str,
    ) -> Result<String> {
        self.fetch_text(ctx, ApiPath::new(api_path::TOPOLOGY_TABULATED).segment(cluster_hint))
            .await
    }

    pub async fn topology_tabulated_from_instance(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<String> {
        self.fetch_text(ctx, ApiPath::new(api_path::TOPOLOGY_TABULATED).instance(key))
            .await
    }

    pub async fn topology_tags(
        &self,
        ctx: &RequestContext,
        cluster_hint: &str,
    ) -> Result<Vec<Instance>> {
        self.fetch_all(ctx, ApiPath::new(api_path::TOPOLOGY_TAGS).segment(cluster_hint))
            .await
    }

    pub async fn topology_tags_from_instance(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<Vec<Instance>> {
        self.fetch_all(ctx, ApiPath::new(api_path::TOPOLOGY_TAGS).instance(key))
            .await
    }

    pub async fn snapshot_topologies(&self, ctx: &RequestContext) -> Result<Vec<InstanceKey>> {
        self.fetch_keys(ctx, ApiPath::new(api_path::SNAPSHOT_TOPOLOGIES))
            .await
    }

    // ============================================================================
    // Replication Control APIs
    // ============================================================================

    pub async fn start_replica(&self, ctx: &RequestContext, key: &InstanceKey) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::START_REPLICA).instance(key))
            .await
    }

    pub async fn restart_replica(&self, ctx: &RequestContext, key: &InstanceKey) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::RESTART_REPLICA).instance(key))
            .await
    }

    pub async fn stop_replica(&self, ctx: &RequestContext, key: &InstanceKey) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::STOP_REPLICA).instance(key))
            .await
    }

    /// Stop replication once the SQL thread caught up with the IO thread
    pub async fn stop_replica_nice(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::STOP_REPLICA_NICE).instance(key))
            .await
    }

    pub async fn reset_replica(&self, ctx: &RequestContext, key: &InstanceKey) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::RESET_REPLICA).instance(key))
            .await
    }

    pub async fn detach_replica(&self, ctx: &RequestContext, key: &InstanceKey) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::DETACH_REPLICA).instance(key))
            .await
    }

    pub async fn reattach_replica(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::REATTACH_REPLICA).instance(key))
            .await
    }

    pub async fn detach_replica_master_host(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::DETACH_REPLICA_MASTER_HOST).instance(key))
            .await
    }

    pub async fn reattach_replica_master_host(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::REATTACH_REPLICA_MASTER_HOST).instance(key))
            .await
    }

    pub async fn skip_query(&self, ctx: &RequestContext, key: &InstanceKey) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::SKIP_QUERY).instance(key))
            .await
    }

    pub async fn flush_binary_logs(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::FLUSH_BINARY_LOGS).instance(key))
            .await
    }

    /// Purge binary logs up to `log_file`
    pub async fn purge_binary_logs(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        log_file: &str,
    ) -> Result<Instance> {
        let path = ApiPath::new(api_path::PURGE_BINARY_LOGS)
            .instance(key)
            .segment(log_file);
        self.fetch(ctx, path).await
    }

    /// SQL statements that would restart replication on `key`
    pub async fn restart_replica_statements(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<Vec<String>> {
        self.fetch_all(ctx, ApiPath::new(api_path::RESTART_REPLICA_STATEMENTS).instance(key))
            .await
    }

    pub async fn delay_replication(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        seconds: u64,
    ) -> Result<Instance> {
        let path = ApiPath::new(api_path::DELAY_REPLICATION)
            .instance(key)
            .segment(seconds);
        self.fetch(ctx, path).await
    }

    pub async fn enable_semi_sync_master(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::ENABLE_SEMI_SYNC_MASTER).instance(key))
            .await
    }

    pub async fn disable_semi_sync_master(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::DISABLE_SEMI_SYNC_MASTER).instance(key))
            .await
    }

    pub async fn enable_semi_sync_replica(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::ENABLE_SEMI_SYNC_REPLICA).instance(key))
            .await
    }

    pub async fn disable_semi_sync_replica(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::DISABLE_SEMI_SYNC_REPLICA).instance(key))
            .await
    }

    // ============================================================================
    // GTID APIs
    // ============================================================================

    pub async fn enable_gtid(&self, ctx: &RequestContext, key: &InstanceKey) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::ENABLE_GTID).instance(key))
            .await
    }

    pub async fn disable_gtid(&self, ctx: &RequestContext, key: &InstanceKey) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::DISABLE_GTID).instance(key))
            .await
    }

    pub async fn locate_errant_gtid(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::LOCATE_GTID_ERRANT).instance(key))
            .await
    }

    pub async fn gtid_errant_reset_master(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::GTID_ERRANT_RESET_MASTER).instance(key))
            .await
    }

    pub async fn gtid_errant_inject_empty(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::GTID_ERRANT_INJECT_EMPTY).instance(key))
            .await
    }

    // ============================================================================
    // Recovery APIs
    // ============================================================================

    pub async fn replication_analysis(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<ReplicationAnalysis>> {
        self.fetch_all(ctx, ApiPath::new(api_path::REPLICATION_ANALYSIS))
            .await
    }

    pub async fn cluster_replication_analysis(
        &self,
        ctx: &RequestContext,
        cluster_name: &str,
    ) -> Result<Vec<ReplicationAnalysis>> {
        self.fetch_all(ctx, ApiPath::new(api_path::REPLICATION_ANALYSIS).segment(cluster_name))
            .await
    }

    pub async fn instance_replication_analysis(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<ReplicationAnalysis> {
        self.fetch(ctx, ApiPath::new(api_path::REPLICATION_ANALYSIS_INSTANCE).instance(key))
            .await
    }

    pub async fn replication_analysis_changelog(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<ReplicationAnalysis>> {
        self.fetch_all(ctx, ApiPath::new(api_path::REPLICATION_ANALYSIS_CHANGELOG))
            .await
    }

    pub async fn recover(&self, ctx: &RequestContext, key: &InstanceKey) -> Result<TopologyRecovery> {
        self.fetch(ctx, ApiPath::new(api_path::RECOVER).instance(key))
            .await
    }

    pub async fn recover_with_candidate(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        candidate: &InstanceKey,
    ) -> Result<TopologyRecovery> {
        let path = ApiPath::new(api_path::RECOVER).instance(key).instance(candidate);
        self.fetch(ctx, path).await
    }

    /// Recovery without running external hooks
    pub async fn recover_lite(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<TopologyRecovery> {
        self.fetch(ctx, ApiPath::new(api_path::RECOVER_LITE).instance(key))
            .await
    }

    pub async fn recover_lite_with_candidate(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        candidate: &InstanceKey,
    ) -> Result<TopologyRecovery> {
        let path = ApiPath::new(api_path::RECOVER_LITE)
            .instance(key)
            .instance(candidate);
        self.fetch(ctx, path).await
    }

    pub async fn graceful_master_takeover(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<TopologyRecovery> {
        self.fetch(ctx, ApiPath::new(api_path::GRACEFUL_MASTER_TAKEOVER).instance(key))
            .await
    }

    pub async fn graceful_master_takeover_cluster(
        &self,
        ctx: &RequestContext,
        cluster_hint: &str,
    ) -> Result<TopologyRecovery> {
        self.fetch(ctx, ApiPath::new(api_path::GRACEFUL_MASTER_TAKEOVER).segment(cluster_hint))
            .await
    }

    pub async fn graceful_master_takeover_with_designated(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        designated: &InstanceKey,
    ) -> Result<TopologyRecovery> {
        let path = ApiPath::new(api_path::GRACEFUL_MASTER_TAKEOVER)
            .instance(key)
            .instance(designated);
        self.fetch(ctx, path).await
    }

    pub async fn graceful_master_takeover_cluster_with_designated(
        &self,
        ctx: &RequestContext,
        cluster_hint: &str,
        designated: &InstanceKey,
    ) -> Result<TopologyRecovery> {
        let path = ApiPath::new(api_path::GRACEFUL_MASTER_TAKEOVER)
            .segment(cluster_hint)
            .instance(designated);
        self.fetch(ctx, path).await
    }

    /// Graceful takeover where orchestrator picks the successor
    pub async fn graceful_master_takeover_auto(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<TopologyRecovery> {
        self.fetch(ctx, ApiPath::new(api_path::GRACEFUL_MASTER_TAKEOVER_AUTO).instance(key))
            .await
    }

    pub async fn graceful_master_takeover_auto_cluster(
        &self,
        ctx: &RequestContext,
        cluster_hint: &str,
    ) -> Result<TopologyRecovery> {
        let path = ApiPath::new(api_path::GRACEFUL_MASTER_TAKEOVER_AUTO).segment(cluster_hint);
        self.fetch(ctx, path).await
    }

    pub async fn force_master_failover(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<TopologyRecovery> {
        self.fetch(ctx, ApiPath::new(api_path::FORCE_MASTER_FAILOVER).instance(key))
            .await
    }

    pub async fn force_master_failover_cluster(
        &self,
        ctx: &RequestContext,
        cluster_hint: &str,
    ) -> Result<TopologyRecovery> {
        self.fetch(ctx, ApiPath::new(api_path::FORCE_MASTER_FAILOVER).segment(cluster_hint))
            .await
    }

    pub async fn force_master_takeover(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        designated: &InstanceKey,
    ) -> Result<TopologyRecovery> {
        let path = ApiPath::new(api_path::FORCE_MASTER_TAKEOVER)
            .instance(key)
            .instance(designated);
        self.fetch(ctx, path).await
    }

    pub async fn force_master_takeover_cluster(
        &self,
        ctx: &RequestContext,
        cluster_hint: &str,
        designated: &InstanceKey,
    ) -> Result<TopologyRecovery> {
        let path = ApiPath::new(api_path::FORCE_MASTER_TAKEOVER)
            .segment(cluster_hint)
            .instance(designated);
        self.fetch(ctx, path).await
    }

    pub async fn register_candidate(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        rule: &CandidatePromotionRule,
    ) -> Result<Instance> {
        let path = ApiPath::new(api_path::REGISTER_CANDIDATE)
            .instance(key)
            .segment(rule);
        self.fetch(ctx, path).await
    }

    /// Patterns for which automated recovery is enabled
    pub async fn automated_recovery_filters(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<AutomatedRecoveryFilter>> {
        let patterns: Vec<String> = self
            .fetch_all(ctx, ApiPath::new(api_path::AUTOMATED_RECOVERY_FILTERS))
            .await?;
        Ok(patterns.into_iter().map(AutomatedRecoveryFilter::from).collect())
    }

    pub async fn audit_failure_detection(
        &self,
        ctx: &RequestContext,
        page: u32,
    ) -> Result<Vec<ReplicationAnalysis>> {
        self.fetch_all(ctx, ApiPath::new(api_path::AUDIT_FAILURE_DETECTION).segment(page))
            .await
    }

    pub async fn audit_failure_detection_by_id(
        &self,
        ctx: &RequestContext,
        id: i64,
    ) -> Result<ReplicationAnalysis> {
        self.fetch(ctx, ApiPath::new(api_path::AUDIT_FAILURE_DETECTION_BY_ID).segment(id))
            .await
    }

    pub async fn audit_failure_detection_by_alias(
        &self,
        ctx: &RequestContext,
        cluster_alias: &str,
        page: u32,
    ) -> Result<Vec<ReplicationAnalysis>> {
        let path = ApiPath::new(api_path::AUDIT_FAILURE_DETECTION_BY_ALIAS)
            .segment(cluster_alias)
            .segment(page);
        self.fetch_all(ctx, path).await
    }

    pub async fn audit_recovery(
        &self,
        ctx: &RequestContext,
        page: u32,
    ) -> Result<Vec<TopologyRecovery>> {
        self.fetch_all(ctx, ApiPath::new(api_path::AUDIT_RECOVERY).segment(page))
            .await
    }

    pub async fn audit_recovery_by_id(
        &self,
        ctx: &RequestContext,
        id: i64,
    ) -> Result<TopologyRecovery> {
        self.fetch(ctx, ApiPath::new(api_path::AUDIT_RECOVERY_BY_ID).segment(id))
            .await
    }

    pub async fn audit_recovery_by_uid(
        &self,
        ctx: &RequestContext,
        uid: &str,
    ) -> Result<Vec<TopologyRecovery>> {
        self.fetch_all(ctx, ApiPath::new(api_path::AUDIT_RECOVERY_BY_UID).segment(uid))
            .await
    }

    pub async fn audit_recovery_by_cluster(
        &self,
        ctx: &RequestContext,
        cluster_name: &str,
        page: u32,
    ) -> Result<Vec<TopologyRecovery>> {
        let path = ApiPath::new(api_path::AUDIT_RECOVERY_BY_CLUSTER)
            .segment(cluster_name)
            .segment(page);
        self.fetch_all(ctx, path).await
    }

    pub async fn audit_recovery_by_alias(
        &self,
        ctx: &RequestContext,
        cluster_alias: &str,
        page: u32,
    ) -> Result<Vec<TopologyRecovery>> {
        let path = ApiPath::new(api_path::AUDIT_RECOVERY_BY_ALIAS)
            .segment(cluster_alias)
            .segment(page);
        self.fetch_all(ctx, path).await
    }

    pub async fn audit_recovery_steps(
        &self,
        ctx: &RequestContext,
        uid: &str,
    ) -> Result<Vec<RecoveryStep>> {
        self.fetch_all(ctx, ApiPath::new(api_path::AUDIT_RECOVERY_STEPS).segment(uid))
            .await
    }

    pub async fn active_cluster_recovery(
        &self,
        ctx: &RequestContext,
        cluster_name: &str,
    ) -> Result<TopologyRecovery> {
        self.fetch(ctx, ApiPath::new(api_path::ACTIVE_CLUSTER_RECOVERY).segment(cluster_name))
            .await
    }

    pub async fn recently_active_cluster_recovery(
        &self,
        ctx: &RequestContext,
        cluster_name: &str,
    ) -> Result<Vec<TopologyRecovery>> {
        let path = ApiPath::new(api_path::RECENTLY_ACTIVE_CLUSTER_RECOVERY).segment(cluster_name);
        self.fetch_all(ctx, path).await
    }

    pub async fn recently_active_instance_recovery(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<Vec<TopologyRecovery>> {
        let path = ApiPath::new(api_path::RECENTLY_ACTIVE_INSTANCE_RECOVERY).instance(key);
        self.fetch_all(ctx, path).await
    }

    pub async fn acknowledge_cluster_recovery(
        &self,
        ctx: &RequestContext,
        cluster_hint: &str,
        comment: &str,
    ) -> Result<TopologyRecovery> {
        let path = ApiPath::new(api_path::ACK_RECOVERY_CLUSTER).segment(cluster_hint);
        self.post(ctx, path, &CommentBody { comment }).await
    }

    pub async fn acknowledge_cluster_recovery_by_alias(
        &self,
        ctx: &RequestContext,
        cluster_alias: &str,
        comment: &str,
    ) -> Result<TopologyRecovery> {
        let path = ApiPath::new(api_path::ACK_RECOVERY_CLUSTER_ALIAS).segment(cluster_alias);
        self.post(ctx, path, &CommentBody { comment }).await
    }

    pub async fn acknowledge_instance_recovery(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        comment: &str,
    ) -> Result<TopologyRecovery> {
        let path = ApiPath::new(api_path::ACK_RECOVERY_INSTANCE).instance(key);
        self.post(ctx, path, &CommentBody { comment }).await
    }

    pub async fn acknowledge_recovery_by_id(
        &self,
        ctx: &RequestContext,
        recovery_id: i64,
        comment: &str,
    ) -> Result<TopologyRecovery> {
        let path = ApiPath::new(api_path::ACK_RECOVERY).segment(recovery_id);
        self.post(ctx, path, &CommentBody { comment }).await
    }

    pub async fn acknowledge_recovery_by_uid(
        &self,
        ctx: &RequestContext,
        uid: &str,
        comment: &str,
    ) -> Result<TopologyRecovery> {
        let path = ApiPath::new(api_path::ACK_RECOVERY_UID).segment(uid);
        self.post(ctx, path, &CommentBody { comment }).await
    }

    pub async fn acknowledge_all_recoveries(
        &self,
        ctx: &RequestContext,
        comment: &str,
    ) -> Result<Vec<TopologyRecovery>> {
        let path = ApiPath::new(api_path::ACK_ALL_RECOVERIES);
        self.post_all(ctx, path, &CommentBody { comment }).await
    }

    pub async fn blocked_recoveries(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<BlockedTopologyRecovery>> {
        self.fetch_all(ctx, ApiPath::new(api_path::BLOCKED_RECOVERIES))
            .await
    }

    pub async fn blocked_recoveries_by_cluster(
        &self,
        ctx: &RequestContext,
        cluster_name: &str,
    ) -> Result<Vec<BlockedTopologyRecovery>> {
        let path = ApiPath::new(api_path::BLOCKED_RECOVERIES_BY_CLUSTER).segment(cluster_name);
        self.fetch_all(ctx, path).await
    }

    pub async fn disable_global_recoveries(&self, ctx: &RequestContext) -> Result<()> {
        self.execute(ctx, ApiPath::new(api_path::DISABLE_GLOBAL_RECOVERIES))
            .await
    }

    pub async fn enable_global_recoveries(&self, ctx: &RequestContext) -> Result<()> {
        self.execute(ctx, ApiPath::new(api_path::ENABLE_GLOBAL_RECOVERIES))
            .await
    }

    /// Whether global recoveries are enabled
    pub async fn check_global_recoveries(&self, ctx: &RequestContext) -> Result<bool> {
        self.fetch_bool(ctx, ApiPath::new(api_path::CHECK_GLOBAL_RECOVERIES))
            .await
    }

    // ============================================================================
    // Maintenance / Downtime APIs
    // ============================================================================

    pub async fn begin_maintenance(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        owner: &str,
        reason: &str,
    ) -> Result<Maintenance> {
        let path = ApiPath::new(api_path::BEGIN_MAINTENANCE)
            .instance(key)
            .segment(owner)
            .segment(reason);
        self.fetch(ctx, path).await
    }

    /// Maintenance that expires after `duration` (whole seconds)
    pub async fn begin_maintenance_for(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        owner: &str,
        reason: &str,
        duration: Duration,
    ) -> Result<Maintenance> {
        let path = ApiPath::new(api_path::BEGIN_MAINTENANCE)
            .instance(key)
            .segment(owner)
            .segment(reason)
            .segment(duration_segment(duration));
        self.fetch(ctx, path).await
    }

    pub async fn end_maintenance(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<Maintenance> {
        self.fetch(ctx, ApiPath::new(api_path::END_MAINTENANCE).instance(key))
            .await
    }

    pub async fn end_maintenance_by_id(
        &self,
        ctx: &RequestContext,
        maintenance_id: u64,
    ) -> Result<Maintenance> {
        self.fetch(ctx, ApiPath::new(api_path::END_MAINTENANCE).segment(maintenance_id))
            .await
    }

    pub async fn in_maintenance(&self, ctx: &RequestContext, key: &InstanceKey) -> Result<bool> {
        self.fetch_bool(ctx, ApiPath::new(api_path::IN_MAINTENANCE).instance(key))
            .await
    }

    pub async fn maintenance(&self, ctx: &RequestContext) -> Result<Vec<Maintenance>> {
        self.fetch_all(ctx, ApiPath::new(api_path::MAINTENANCE)).await
    }

    pub async fn begin_downtime(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        owner: &str,
        reason: &str,
    ) -> Result<Instance> {
        let path = ApiPath::new(api_path::BEGIN_DOWNTIME)
            .instance(key)
            .segment(owner)
            .segment(reason);
        self.fetch(ctx, path).await
    }

    /// Downtime that expires after `duration` (whole seconds)
    pub async fn begin_downtime_for(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        owner: &str,
        reason: &str,
        duration: Duration,
    ) -> Result<Instance> {
        let path = ApiPath::new(api_path::BEGIN_DOWNTIME)
            .instance(key)
            .segment(owner)
            .segment(reason)
            .segment(duration_segment(duration));
        self.fetch(ctx, path).await
    }

    pub async fn end_downtime(&self, ctx: &RequestContext, key: &InstanceKey) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::END_DOWNTIME).instance(key))
            .await
    }

    pub async fn downtimed(&self, ctx: &RequestContext) -> Result<Vec<Instance>> {
        self.fetch_all(ctx, ApiPath::new(api_path::DOWNTIMED)).await
    }

    pub async fn downtimed_by_cluster(
        &self,
        ctx: &RequestContext,
        cluster_hint: &str,
    ) -> Result<Vec<Instance>> {
        self.fetch_all(ctx, ApiPath::new(api_path::DOWNTIMED).segment(cluster_hint))
            .await
    }

    // ============================================================================
    // Tagging APIs
    // ============================================================================

    pub async fn tagged(&self, ctx: &RequestContext) -> Result<Vec<Instance>> {
        self.fetch_all(ctx, ApiPath::new(api_path::TAGGED)).await
    }

    pub async fn instance_tags(&self, ctx: &RequestContext, key: &InstanceKey) -> Result<Vec<Tag>> {
        self.fetch_all(ctx, ApiPath::new(api_path::TAGS).instance(key))
            .await
    }

    /// All tags of `key` as a name → value map
    pub async fn instance_tag_values(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<HashMap<String, String>> {
        self.fetch_all(ctx, ApiPath::new(api_path::TAG_VALUE).instance(key))
            .await
    }

    pub async fn instance_tag_value(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        tag_name: &str,
    ) -> Result<String> {
        let path = ApiPath::new(api_path::TAG_VALUE)
            .instance(key)
            .segment(tag_name);
        self.fetch_string(ctx, path).await
    }

    pub async fn instance_tag(&self, ctx: &RequestContext, key: &InstanceKey) -> Result<Vec<Tag>> {
        self.fetch_all(ctx, ApiPath::new(api_path::TAG).instance(key))
            .await
    }

    pub async fn tag(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        tag_name: &str,
        tag_value: &str,
    ) -> Result<Instance> {
        let path = ApiPath::new(api_path::TAG)
            .instance(key)
            .segment(tag_name)
            .segment(tag_value);
        self.fetch(ctx, path).await
    }

    pub async fn untag(&self, ctx: &RequestContext, key: &InstanceKey) -> Result<Instance> {
        self.fetch(ctx, ApiPath::new(api_path::UNTAG).instance(key))
            .await
    }

    pub async fn untag_named(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        tag_name: &str,
    ) -> Result<Instance> {
        let path = ApiPath::new(api_path::UNTAG).instance(key).segment(tag_name);
        self.fetch(ctx, path).await
    }

    pub async fn untag_all(&self, ctx: &RequestContext) -> Result<Vec<Instance>> {
        self.fetch_all(ctx, ApiPath::new(api_path::UNTAG_ALL)).await
    }

    pub async fn untag_all_named(
        &self,
        ctx: &RequestContext,
        tag_name: &str,
        tag_value: &str,
    ) -> Result<Vec<Instance>> {
        let path = ApiPath::new(api_path::UNTAG_ALL)
            .segment(tag_name)
            .segment(tag_value);
        self.fetch_all(ctx, path).await
    }

    // ============================================================================
    // Agent APIs
    // ============================================================================

    pub async fn agents(&self, ctx: &RequestContext) -> Result<Vec<Agent>> {
        self.fetch_all(ctx, ApiPath::new(api_path::AGENTS)).await
    }

    pub async fn agent(&self, ctx: &RequestContext, host: &str) -> Result<Agent> {
        self.fetch(ctx, ApiPath::new(api_path::AGENT).segment(host)).await
    }

    pub async fn agent_unmount(&self, ctx: &RequestContext, host: &str) -> Result<()> {
        self.execute(ctx, ApiPath::new(api_path::AGENT_UMOUNT).segment(host))
            .await
    }

    pub async fn agent_mount(&self, ctx: &RequestContext, host: &str) -> Result<()> {
        self.execute(ctx, ApiPath::new(api_path::AGENT_MOUNT).segment(host))
            .await
    }

    pub async fn agent_create_snapshot(&self, ctx: &RequestContext, host: &str) -> Result<()> {
        self.execute(ctx, ApiPath::new(api_path::AGENT_CREATE_SNAPSHOT).segment(host))
            .await
    }

    /// Remove the snapshot logical volume on `host`
    pub async fn agent_remove_lv(&self, ctx: &RequestContext, host: &str) -> Result<()> {
        self.execute(ctx, ApiPath::new(api_path::AGENT_REMOVE_LV).segment(host))
            .await
    }

    pub async fn agent_mysql_stop(&self, ctx: &RequestContext, host: &str) -> Result<()> {
        self.execute(ctx, ApiPath::new(api_path::AGENT_MYSQL_STOP).segment(host))
            .await
    }

    pub async fn agent_mysql_start(&self, ctx: &RequestContext, host: &str) -> Result<()> {
        self.execute(ctx, ApiPath::new(api_path::AGENT_MYSQL_START).segment(host))
            .await
    }

    /// Seed `target_host` from `source_host`
    pub async fn agent_seed(
        &self,
        ctx: &RequestContext,
        target_host: &str,
        source_host: &str,
    ) -> Result<AgentSeed> {
        let path = ApiPath::new(api_path::AGENT_SEED)
            .segment(target_host)
            .segment(source_host);
        self.fetch(ctx, path).await
    }

    pub async fn agent_active_seeds(&self, ctx: &RequestContext, host: &str) -> Result<Vec<AgentSeed>> {
        self.fetch_all(ctx, ApiPath::new(api_path::AGENT_ACTIVE_SEEDS).segment(host))
            .await
    }

    pub async fn agent_recent_seeds(&self, ctx: &RequestContext, host: &str) -> Result<Vec<AgentSeed>> {
        self.fetch_all(ctx, ApiPath::new(api_path::AGENT_RECENT_SEEDS).segment(host))
            .await
    }

    pub async fn agent_seed_details(&self, ctx: &RequestContext, seed_id: i64) -> Result<AgentSeed> {
        self.fetch(ctx, ApiPath::new(api_path::AGENT_SEED_DETAILS).segment(seed_id))
            .await
    }

    pub async fn agent_seed_states(
        &self,
        ctx: &RequestContext,
        seed_id: i64,
    ) -> Result<Vec<AgentSeedState>> {
        self.fetch_all(ctx, ApiPath::new(api_path::AGENT_SEED_STATES).segment(seed_id))
            .await
    }

    pub async fn abort_agent_seed(&self, ctx: &RequestContext, seed_id: i64) -> Result<()> {
        self.execute(ctx, ApiPath::new(api_path::AGENT_ABORT_SEED).segment(seed_id))
            .await
    }

    pub async fn agent_custom_command(
        &self,
        ctx: &RequestContext,
        host: &str,
        command: &str,
    ) -> Result<()> {
        let path = ApiPath::new(api_path::AGENT_CUSTOM_COMMAND)
            .segment(host)
            .segment(command);
        self.execute(ctx, path).await
    }

    pub async fn seeds(&self, ctx: &RequestContext) -> Result<Vec<AgentSeed>> {
        self.fetch_all(ctx, ApiPath::new(api_path::SEEDS)).await
    }

    // ============================================================================
    // Raft APIs
    // ============================================================================

    pub async fn grab_election(&self, ctx: &RequestContext) -> Result<()> {
        self.execute(ctx, ApiPath::new(api_path::GRAB_ELECTION)).await
    }

    pub async fn raft_add_peer(&self, ctx: &RequestContext, addr: &str) -> Result<()> {
        self.execute(ctx, ApiPath::new(api_path::RAFT_ADD_PEER).segment(addr))
            .await
    }

    pub async fn raft_remove_peer(&self, ctx: &RequestContext, addr: &str) -> Result<()> {
        self.execute(ctx, ApiPath::new(api_path::RAFT_REMOVE_PEER).segment(addr))
            .await
    }

    /// Ask the leader to step down in favour of `node`
    pub async fn raft_yield(&self, ctx: &RequestContext, node: &str) -> Result<()> {
        self.execute(ctx, ApiPath::new(api_path::RAFT_YIELD).segment(node))
            .await
    }

    pub async fn raft_yield_hint(&self, ctx: &RequestContext, hint: &str) -> Result<()> {
        self.execute(ctx, ApiPath::new(api_path::RAFT_YIELD_HINT).segment(hint))
            .await
    }

    pub async fn raft_peers(&self, ctx: &RequestContext) -> Result<Vec<String>> {
        self.fetch_all(ctx, ApiPath::new(api_path::RAFT_PEERS)).await
    }

    pub async fn raft_state(&self, ctx: &RequestContext) -> Result<RaftState> {
        self.fetch(ctx, ApiPath::new(api_path::RAFT_STATE)).await
    }

    /// Address of the raft leader; empty when none is known
    pub async fn raft_leader(&self, ctx: &RequestContext) -> Result<String> {
        self.fetch_string(ctx, ApiPath::new(api_path::RAFT_LEADER)).await
    }

    pub async fn raft_health(&self, ctx: &RequestContext) -> Result<RaftMembershipHealth> {
        self.fetch(ctx, ApiPath::new(api_path::RAFT_HEALTH)).await
    }

    pub async fn raft_status(
        &self,
        ctx: &RequestContext,
    ) -> Result<serde_json::Map<String, serde_json::Value>> {
        self.fetch_all(ctx, ApiPath::new(api_path::RAFT_STATUS)).await
    }

    /// Raw raft snapshot as served by the leader
    pub async fn raft_snapshot(&self, ctx: &RequestContext) -> Result<Vec<u8>> {
        self.http_client
            .get_bytes(ctx, &ApiPath::new(api_path::RAFT_SNAPSHOT))
            .await
    }

    pub async fn raft_follower_health_report(
        &self,
        ctx: &RequestContext,
        auth_token: &str,
        raft_bind: &str,
        raft_advertise: &str,
    ) -> Result<()> {
        let path = ApiPath::new(api_path::RAFT_FOLLOWER_HEALTH_REPORT)
            .segment(auth_token)
            .segment(raft_bind)
            .segment(raft_advertise);
        self.execute(ctx, path).await
    }

    pub async fn reelect(&self, ctx: &RequestContext) -> Result<()> {
        self.execute(ctx, ApiPath::new(api_path::REELECT)).await
    }

    // ============================================================================
    // Pool / KV Store APIs
    // ============================================================================

    pub async fn submit_pool_instances(&self, ctx: &RequestContext, pool: &str) -> Result<()> {
        self.execute(ctx, ApiPath::new(api_path::SUBMIT_POOL_INSTANCES).segment(pool))
            .await
    }

    pub async fn cluster_pool_instances(
        &self,
        ctx: &RequestContext,
        cluster_name: &str,
    ) -> Result<PoolInstancesMap> {
        self.fetch_all(ctx, ApiPath::new(api_path::CLUSTER_POOL_INSTANCES).segment(cluster_name))
            .await
    }

    pub async fn cluster_pool_instances_for_pool(
        &self,
        ctx: &RequestContext,
        cluster_name: &str,
        pool: &str,
    ) -> Result<Vec<InstanceKey>> {
        let path = ApiPath::new(api_path::CLUSTER_POOL_INSTANCES)
            .segment(cluster_name)
            .segment(pool);
        self.fetch_keys(ctx, path).await
    }

    pub async fn heuristic_cluster_pool_instances(
        &self,
        ctx: &RequestContext,
        cluster_name: &str,
    ) -> Result<PoolInstancesMap> {
        let path = ApiPath::new(api_path::HEURISTIC_CLUSTER_POOL_INSTANCES).segment(cluster_name);
        self.fetch_all(ctx, path).await
    }

    pub async fn heuristic_cluster_pool_instances_for_pool(
        &self,
        ctx: &RequestContext,
        cluster_name: &str,
        pool: &str,
    ) -> Result<Vec<InstanceKey>> {
        let path = ApiPath::new(api_path::HEURISTIC_CLUSTER_POOL_INSTANCES)
            .segment(cluster_name)
            .segment(pool);
        self.fetch_keys(ctx, path).await
    }

    /// Replication lag per pool, in seconds
    pub async fn heuristic_cluster_pool_lag(
        &self,
        ctx: &RequestContext,
        cluster_name: &str,
    ) -> Result<HashMap<String, i64>> {
        let path = ApiPath::new(api_path::HEURISTIC_CLUSTER_POOL_LAG).segment(cluster_name);
        self.fetch_all(ctx, path).await
    }

    pub async fn heuristic_cluster_pool_lag_for_pool(
        &self,
        ctx: &RequestContext,
        cluster_name: &str,
        pool: &str,
    ) -> Result<i64> {
        let path = ApiPath::new(api_path::HEURISTIC_CLUSTER_POOL_LAG)
            .segment(cluster_name)
            .segment(pool);
        self.fetch_i64(ctx, path).await
    }

    pub async fn submit_masters_to_kv_stores(&self, ctx: &RequestContext) -> Result<()> {
        self.execute(ctx, ApiPath::new(api_path::SUBMIT_MASTERS_TO_KV_STORES))
            .await
    }

    pub async fn submit_cluster_master_to_kv_stores(
        &self,
        ctx: &RequestContext,
        cluster_hint: &str,
    ) -> Result<()> {
        let path = ApiPath::new(api_path::SUBMIT_MASTERS_TO_KV_STORES).segment(cluster_hint);
        self.execute(ctx, path).await
    }

    // ============================================================================
    // Audit / Hostname / Promotion Rule APIs
    // ============================================================================

    pub async fn audit(&self, ctx: &RequestContext, page: u32) -> Result<Vec<AuditEntry>> {
        self.fetch_all(ctx, ApiPath::new(api_path::AUDIT).segment(page))
            .await
    }

    pub async fn audit_for_instance(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        page: u32,
    ) -> Result<Vec<AuditEntry>> {
        let path = ApiPath::new(api_path::AUDIT_INSTANCE).instance(key).segment(page);
        self.fetch_all(ctx, path).await
    }

    pub async fn hostname_resolve_cache(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<HostnameResolveCache>> {
        self.fetch_all(ctx, ApiPath::new(api_path::HOSTNAME_RESOLVE_CACHE))
            .await
    }

    pub async fn reset_hostname_resolve_cache(&self, ctx: &RequestContext) -> Result<()> {
        self.execute(ctx, ApiPath::new(api_path::RESET_HOSTNAME_RESOLVE_CACHE))
            .await
    }

    /// Map `key` to `virtual_name` when resolving hostnames
    pub async fn register_hostname_unresolve(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
        virtual_name: &str,
    ) -> Result<()> {
        let path = ApiPath::new(api_path::REGISTER_HOSTNAME_UNRESOLVE)
            .instance(key)
            .segment(virtual_name);
        self.execute(ctx, path).await
    }

    pub async fn deregister_hostname_unresolve(
        &self,
        ctx: &RequestContext,
        key: &InstanceKey,
    ) -> Result<()> {
        self.execute(ctx, ApiPath::new(api_path::DEREGISTER_HOSTNAME_UNRESOLVE).instance(key))
            .await
    }

    /// Promotion rule registered per instance, keyed by `host:port`
    pub async fn bulk_promotion_rules(
        &self,
        ctx: &RequestContext,
    ) -> Result<HashMap<String, CandidatePromotionRule>> {
        self.fetch_all(ctx, ApiPath::new(api_path::BULK_PROMOTION_RULES))
            .await
    }

    // ============================================================================
    // Monitoring APIs
    // ============================================================================

    pub async fn discovery_metrics_raw(
        &self,
        ctx: &RequestContext,
        seconds: u64,
    ) -> Result<Vec<DiscoveryMetric>> {
        self.fetch_all(ctx, ApiPath::new(api_path::DISCOVERY_METRICS_RAW).segment(seconds))
            .await
    }

    pub async fn discovery_metrics_aggregated(
        &self,
        ctx: &RequestContext,
        seconds: u64,
    ) -> Result<Vec<DiscoveryMetric>> {
        let path = ApiPath::new(api_path::DISCOVERY_METRICS_AGGREGATED).segment(seconds);
        self.fetch_all(ctx, path).await
    }

    pub async fn discovery_queue_metrics_raw(
        &self,
        ctx: &RequestContext,
        seconds: u64,
    ) -> Result<Vec<DiscoveryQueueMetric>> {
        let path = ApiPath::new(api_path::DISCOVERY_QUEUE_METRICS_RAW).segment(seconds);
        self.fetch_all(ctx, path).await
    }

    pub async fn discovery_queue_metrics_aggregated(
        &self,
        ctx: &RequestContext,
        seconds: u64,
    ) -> Result<Vec<DiscoveryQueueMetric>> {
        let path = ApiPath::new(api_path::DISCOVERY_QUEUE_METRICS_AGGREGATED).segment(seconds);
        self.fetch_all(ctx, path).await
    }

    pub async fn discovery_queue_metrics_raw_by_queue(
        &self,
        ctx: &RequestContext,
        queue: &str,
        seconds: u64,
    ) -> Result<Vec<DiscoveryQueueMetric>> {
        let path = ApiPath::new(api_path::DISCOVERY_QUEUE_METRICS_RAW)
            .segment(queue)
            .segment(seconds);
        self.fetch_all(ctx, path).await
    }

    pub async fn discovery_queue_metrics_aggregated_by_queue(
        &self,
        ctx: &RequestContext,
        queue: &str,
        seconds: u64,
    ) -> Result<Vec<DiscoveryQueueMetric>> {
        let path = ApiPath::new(api_path::DISCOVERY_QUEUE_METRICS_AGGREGATED)
            .segment(queue)
            .segment(seconds);
        self.fetch_all(ctx, path).await
    }

    pub async fn backend_query_metrics_raw(
        &self,
        ctx: &RequestContext,
        seconds: u64,
    ) -> Result<Vec<BackendQueryMetric>> {
        let path = ApiPath::new(api_path::BACKEND_QUERY_METRICS_RAW).segment(seconds);
        self.fetch_all(ctx, path).await
    }

    pub async fn backend_query_metrics_aggregated(
        &self,
        ctx: &RequestContext,
        seconds: u64,
    ) -> Result<Vec<BackendQueryMetric>> {
        let path = ApiPath::new(api_path::BACKEND_QUERY_METRICS_AGGREGATED).segment(seconds);
        self.fetch_all(ctx, path).await
    }

    pub async fn write_buffer_metrics_raw(
        &self,
        ctx: &RequestContext,
        seconds: u64,
    ) -> Result<Vec<WriteBufferMetric>> {
        let path = ApiPath::new(api_path::WRITE_BUFFER_METRICS_RAW).segment(seconds);
        self.fetch_all(ctx, path).await
    }

    pub async fn write_buffer_metrics_aggregated(
        &self,
        ctx: &RequestContext,
        seconds: u64,
    ) -> Result<Vec<WriteBufferMetric>> {
        let path = ApiPath::new(api_path::WRITE_BUFFER_METRICS_AGGREGATED).segment(seconds);
        self.fetch_all(ctx, path).await
    }
}
