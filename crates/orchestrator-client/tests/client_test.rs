//! Operation facade tests against a mock orchestrator

use std::sync::Arc;
use std::time::Duration;

use orchestrator_client::model::{CandidatePromotionRule, InstanceKey};
use orchestrator_client::{
    ClientError, CodeConvention, OrchestratorClient, OrchestratorClientConfig, RequestContext,
    RequestMetrics,
};
use orchestrator_http::{HttpClientConfig, OrchestratorHttpClient};
use serde_json::json;
use wiremock::matchers::{basic_auth, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ok(details: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"Code": "OK", "Message": "", "Details": details}))
}

fn api_error(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"Code": "ERROR", "Message": message, "Details": null}))
}

async fn client_for(server: &MockServer) -> OrchestratorClient {
    OrchestratorClient::from_base_url(&server.uri()).await.unwrap()
}

fn db1() -> InstanceKey {
    InstanceKey::new("db1.example.com", 3306)
}

fn ctx() -> RequestContext {
    RequestContext::background()
}

// ============== Instances ==============

#[tokio::test]
async fn test_begin_downtime_path_and_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/begin-downtime/db1.example.com/3306/admin/maintenance"))
        .respond_with(ok(json!({
            "Key": {"Hostname": "db1.example.com", "Port": 3306},
            "IsDowntimed": true,
            "DowntimeOwner": "admin"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let instance = client
        .begin_downtime(&ctx(), &db1(), "admin", "maintenance")
        .await
        .unwrap();

    assert!(instance.is_downtimed);
    assert_eq!(instance.downtime_owner, "admin");
    assert_eq!(instance.key, db1());
}

#[tokio::test]
async fn test_begin_maintenance_with_duration() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/begin-maintenance/db1.example.com/3306/admin/upgrade/3600s"))
        .respond_with(ok(json!({"MaintenanceId": 12, "IsActive": true, "Owner": "admin"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let maintenance = client
        .begin_maintenance_for(&ctx(), &db1(), "admin", "upgrade", Duration::from_secs(3600))
        .await
        .unwrap();

    assert_eq!(maintenance.maintenance_id, 12);
    assert!(maintenance.is_active);
}

#[tokio::test]
async fn test_instance_partial_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/instance/db1.example.com/3306"))
        .respond_with(ok(json!({
            "Key": {"Hostname": "db1.example.com", "Port": 3306},
            "ReadOnly": true
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let instance = client.instance(&ctx(), &db1()).await.unwrap();

    assert_eq!(instance.key, db1());
    assert!(instance.read_only);
    assert!(!instance.is_downtimed);
    assert_eq!(instance.server_id, 0);
}

#[tokio::test]
async fn test_api_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/instance/db1.example.com/3306"))
        .respond_with(api_error("Instance not found"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.instance(&ctx(), &db1()).await.unwrap_err();

    assert_eq!(err.to_string(), "API error: Instance not found");
    assert_eq!(err.api_message(), Some("Instance not found"));
}

#[tokio::test]
async fn test_single_record_without_details() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cluster-info/main"))
        .respond_with(ok(json!(null)))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.cluster_info(&ctx(), "main").await.unwrap_err();
    assert!(matches!(err, ClientError::MissingDetails));
}

#[tokio::test]
async fn test_null_details_decode_as_empty_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cluster/main"))
        .respond_with(ok(json!(null)))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let instances = client.cluster(&ctx(), "main").await.unwrap();
    assert!(instances.is_empty());
}

#[tokio::test]
async fn test_search_term_is_percent_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search/db%201%2Fprod"))
        .respond_with(ok(json!([{"Key": {"Hostname": "db1", "Port": 3306}}])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let found = client.search(&ctx(), "db 1/prod").await.unwrap();
    assert_eq!(found.len(), 1);
}

#[tokio::test]
async fn test_bulk_instances_posts_keys() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/bulk-instances"))
        .and(body_json(json!([
            {"Hostname": "db1.example.com", "Port": 3306},
            {"Hostname": "db2.example.com", "Port": 3307}
        ])))
        .respond_with(ok(json!([
            {"Key": {"Hostname": "db1.example.com", "Port": 3306}},
            {"Key": {"Hostname": "db2.example.com", "Port": 3307}}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let keys = vec![db1(), InstanceKey::new("db2.example.com", 3307)];
    let instances = client.bulk_instances(&ctx(), &keys).await.unwrap();

    assert_eq!(instances.len(), 2);
    assert_eq!(instances[1].key.port, 3307);
}

// ============== Clusters / topology ==============

#[tokio::test]
async fn test_set_cluster_alias_posts_alias() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/set-cluster-alias/db1.example.com:3306"))
        .and(body_json(json!({"alias": "main"})))
        .respond_with(ok(json!(null)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .set_cluster_alias(&ctx(), "db1.example.com:3306", "main")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_relocate_uses_both_keys() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/relocate/db2/3306/db1/3306"))
        .respond_with(ok(json!({
            "Key": {"Hostname": "db2", "Port": 3306},
            "MasterKey": {"Hostname": "db1", "Port": 3306}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let moved = client
        .relocate(&ctx(), &InstanceKey::new("db2", 3306), &InstanceKey::new("db1", 3306))
        .await
        .unwrap();
    assert_eq!(moved.master_key, InstanceKey::new("db1", 3306));
}

#[tokio::test]
async fn test_topology_plain_text_and_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/topology/main"))
        .respond_with(ResponseTemplate::new(200).set_body_string("db1:3306\n+ db2:3306\n"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/topology-tabulated/main"))
        .respond_with(ok(json!("db1:3306|0s|ok")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/topology/missing"))
        .respond_with(api_error("Unable to determine cluster name"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(
        client.topology(&ctx(), "main").await.unwrap(),
        "db1:3306\n+ db2:3306\n"
    );
    assert_eq!(
        client.topology_tabulated(&ctx(), "main").await.unwrap(),
        "db1:3306|0s|ok"
    );
    let err = client.topology(&ctx(), "missing").await.unwrap_err();
    assert_eq!(err.api_message(), Some("Unable to determine cluster name"));
}

#[tokio::test]
async fn test_snapshot_topologies_skips_invalid_keys() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/snapshot-topologies"))
        .respond_with(ok(json!(["db1:3306", "garbage", "db2:abc", "db3:3307"])))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let keys = client.snapshot_topologies(&ctx()).await.unwrap();
    assert_eq!(
        keys,
        vec![InstanceKey::new("db1", 3306), InstanceKey::new("db3", 3307)]
    );
}

// ============== Recovery ==============

#[tokio::test]
async fn test_acknowledge_instance_recovery_posts_comment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ack-recovery/instance/db1.example.com/3306"))
        .and(body_json(json!({"comment": "handled by oncall"})))
        .respond_with(ok(json!({"Id": 9, "Acknowledged": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let recovery = client
        .acknowledge_instance_recovery(&ctx(), &db1(), "handled by oncall")
        .await
        .unwrap();
    assert_eq!(recovery.id, 9);
    assert!(recovery.acknowledged);
}

#[tokio::test]
async fn test_acknowledge_all_recoveries() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ack-all-recoveries"))
        .and(body_json(json!({"comment": "bulk ack"})))
        .respond_with(ok(json!(null)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let acknowledged = client
        .acknowledge_all_recoveries(&ctx(), "bulk ack")
        .await
        .unwrap();
    assert!(acknowledged.is_empty());
}

#[tokio::test]
async fn test_check_global_recoveries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/check-global-recoveries"))
        .respond_with(ok(json!("true")))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert!(client.check_global_recoveries(&ctx()).await.unwrap());
}

#[tokio::test]
async fn test_automated_recovery_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/automated-recovery-filters"))
        .respond_with(ok(json!(["db-.*", "main"])))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let filters = client.automated_recovery_filters(&ctx()).await.unwrap();
    let patterns: Vec<&str> = filters.iter().map(|f| f.pattern.as_str()).collect();
    assert_eq!(patterns, vec!["db-.*", "main"]);
}

#[tokio::test]
async fn test_register_candidate_rule_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/register-candidate/db1.example.com/3306/prefer"))
        .respond_with(ok(json!({"Key": {"Hostname": "db1.example.com", "Port": 3306}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .register_candidate(&ctx(), &db1(), &CandidatePromotionRule::Prefer)
        .await
        .unwrap();
}

// ============== Lenient scalars ==============

#[tokio::test]
async fn test_raft_leader_lenient_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/raft-leader"))
        .respond_with(ok(json!(null)))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/raft-leader"))
        .respond_with(ok(json!("10.0.0.1:10008")))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(client.raft_leader(&ctx()).await.unwrap(), "");
    assert_eq!(client.raft_leader(&ctx()).await.unwrap(), "10.0.0.1:10008");
}

#[tokio::test]
async fn test_instance_tag_value_number() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tag-value/db1.example.com/3306/weight"))
        .respond_with(ok(json!(10)))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let value = client
        .instance_tag_value(&ctx(), &db1(), "weight")
        .await
        .unwrap();
    assert_eq!(value, "10");
}

#[tokio::test]
async fn test_pool_lag_truncates_float() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/heuristic-cluster-pool-lag/main/web"))
        .respond_with(ok(json!(2.7)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/heuristic-cluster-pool-lag/main"))
        .respond_with(ok(json!({"web": 2, "reporting": 30})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(
        client
            .heuristic_cluster_pool_lag_for_pool(&ctx(), "main", "web")
            .await
            .unwrap(),
        2
    );
    let lags = client
        .heuristic_cluster_pool_lag(&ctx(), "main")
        .await
        .unwrap();
    assert_eq!(lags["reporting"], 30);
}

#[tokio::test]
async fn test_cluster_pool_instances_for_pool() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cluster-pool-instances/main/web"))
        .respond_with(ok(json!(["db4:3306", "not-a-key", "db5:3306"])))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let keys = client
        .cluster_pool_instances_for_pool(&ctx(), "main", "web")
        .await
        .unwrap();
    assert_eq!(keys.len(), 2);
    assert_eq!(keys[1], InstanceKey::new("db5", 3306));
}

#[tokio::test]
async fn test_bulk_promotion_rules() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/bulk-promotion-rules"))
        .respond_with(ok(json!({"db1:3306": "prefer", "db2:3306": "must_not"})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let rules = client.bulk_promotion_rules(&ctx()).await.unwrap();
    assert_eq!(rules["db1:3306"], CandidatePromotionRule::Prefer);
    assert_eq!(rules["db2:3306"], CandidatePromotionRule::MustNot);
}

// ============== Raw bodies ==============

#[tokio::test]
async fn test_raft_snapshot_raw_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/raft-snapshot"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x1f, 0x8b, 0x08]))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(
        client.raft_snapshot(&ctx()).await.unwrap(),
        vec![0x1f, 0x8b, 0x08]
    );
}

// ============== Cancellation ==============

#[tokio::test]
async fn test_cancelled_context_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/clusters"))
        .respond_with(ok(json!(["main"])))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let ctx = RequestContext::background();
    ctx.cancel();

    let err = client.clusters(&ctx).await.unwrap_err();
    assert!(matches!(err, ClientError::Cancelled));
    assert!(err.is_cancellation());
}

#[tokio::test]
async fn test_deadline_exceeded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/problems"))
        .respond_with(ok(json!([])).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let ctx = RequestContext::with_timeout(Duration::from_millis(100));

    let err = client.problems(&ctx).await.unwrap_err();
    assert!(matches!(err, ClientError::DeadlineExceeded));
}

// ============== Configuration ==============

#[tokio::test]
async fn test_integer_code_convention() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/clusters"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"Code": 1, "Message": "", "Details": ["main"]})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/masters"))
        .respond_with(ok(json!([])))
        .mount(&server)
        .await;

    let config =
        OrchestratorClientConfig::new(&server.uri()).with_code_convention(CodeConvention::Integer);
    let client = OrchestratorClient::new(config).await.unwrap();

    assert_eq!(client.clusters(&ctx()).await.unwrap(), vec!["main"]);
    let err = client.masters(&ctx()).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { .. }));
}

#[tokio::test]
async fn test_basic_auth_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .and(basic_auth("admin", "secret"))
        .respond_with(ok(json!(null)))
        .expect(1)
        .mount(&server)
        .await;

    let config = OrchestratorClientConfig::new(&server.uri()).with_auth("admin", "secret");
    let client = OrchestratorClient::new(config).await.unwrap();
    client.health(&ctx()).await.unwrap();
}

#[tokio::test]
async fn test_leader_is_pinned_among_endpoints() {
    let follower = MockServer::start().await;
    let leader = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/leader-check"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&follower)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/leader-check"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&leader)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/raft-peers"))
        .respond_with(ok(json!(["10.0.0.1:10008", "10.0.0.2:10008"])))
        .expect(1)
        .mount(&leader)
        .await;

    let config = OrchestratorClientConfig::default()
        .with_endpoints(vec![follower.uri(), leader.uri()]);
    let client = OrchestratorClient::new(config).await.unwrap();

    assert_eq!(client.leader(), Some(format!("{}/api", leader.uri())));
    assert_eq!(client.raft_peers(&ctx()).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_unprobed_client_refuses_requests_until_resolved() {
    let follower = MockServer::start().await;
    let leader = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/leader-check"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&follower)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/clusters"))
        .respond_with(ok(json!(["wrong"])))
        .expect(0)
        .mount(&follower)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/leader-check"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&leader)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/clusters"))
        .respond_with(ok(json!(["main"])))
        .expect(1)
        .mount(&leader)
        .await;

    let http_client = OrchestratorHttpClient::new_without_probe(HttpClientConfig::with_endpoints(
        vec![follower.uri(), leader.uri()],
    ))
    .unwrap();
    let client = OrchestratorClient::from_http_client(http_client);
    assert_eq!(client.leader(), None);

    let err = client.clusters(&ctx()).await.unwrap_err();
    assert!(matches!(err, ClientError::NoLeader { .. }));

    client.refresh_leader().await.unwrap();
    assert_eq!(client.clusters(&ctx()).await.unwrap(), vec!["main"]);
}

#[tokio::test]
async fn test_dot_segments_are_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ok(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.search(&ctx(), ".").await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidUrl(_)));

    let err = client
        .begin_downtime(&ctx(), &db1(), "admin", "..")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidUrl(_)));
}

#[tokio::test]
async fn test_metrics_per_operation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/instance/db1.example.com/3306"))
        .respond_with(api_error("Instance not found"))
        .mount(&server)
        .await;

    let registry = prometheus::Registry::new();
    let metrics = Arc::new(RequestMetrics::new(&registry).unwrap());
    let client = client_for(&server).await.with_metrics(metrics.clone());

    let _ = client.instance(&ctx(), &db1()).await;

    assert_eq!(
        metrics
            .failed_request_count
            .with_label_values(&["instance", "api"])
            .get(),
        1.0
    );
}
