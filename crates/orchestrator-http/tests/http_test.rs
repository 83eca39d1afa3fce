//! Transport tests against a mock orchestrator

use std::sync::Arc;
use std::time::Duration;

use orchestrator_http::{
    ApiPath, ClientError, CodeConvention, HttpClientConfig, OrchestratorHttpClient, RequestContext,
    RequestMetrics,
};
use serde_json::json;
use wiremock::matchers::{basic_auth, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ok(details: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"Code": "OK", "Message": "", "Details": details}))
}

async fn client_for(server: &MockServer) -> OrchestratorHttpClient {
    OrchestratorHttpClient::new(HttpClientConfig::new(&server.uri()))
        .await
        .unwrap()
}

// ============== Requests ==============

#[tokio::test]
async fn test_get_decodes_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/clusters"))
        .respond_with(ok(json!(["main", "edge"])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let clusters: Vec<String> = client
        .get(&RequestContext::background(), &ApiPath::new("clusters"))
        .await
        .unwrap()
        .into_collection()
        .unwrap();

    assert_eq!(clusters, vec!["main", "edge"]);
}

#[tokio::test]
async fn test_post_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/set-cluster-alias/main"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"alias": "primary"})))
        .respond_with(ok(json!(null)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .post_json(
            &RequestContext::background(),
            &ApiPath::new("set-cluster-alias").segment("main"),
            &json!({"alias": "primary"}),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_segments_are_percent_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search/db%201"))
        .respond_with(ok(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .get(&RequestContext::background(), &ApiPath::new("search").segment("db 1"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_url_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orchestrator/api/health"))
        .respond_with(ok(json!(null)))
        .expect(1)
        .mount(&server)
        .await;

    let config = HttpClientConfig::new(&server.uri()).with_url_prefix("/orchestrator");
    let client = OrchestratorHttpClient::new(config).await.unwrap();
    client
        .get(&RequestContext::background(), &ApiPath::new("health"))
        .await
        .unwrap();
}

// ============== Authentication ==============

#[tokio::test]
async fn test_basic_auth_and_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .and(basic_auth("admin", "secret"))
        .and(header("X-Orchestrator-Token", "t0k3n"))
        .respond_with(ok(json!(null)))
        .expect(1)
        .mount(&server)
        .await;

    let config = HttpClientConfig::new(&server.uri())
        .with_auth("admin", "secret")
        .with_header("X-Orchestrator-Token", "t0k3n");
    let client = OrchestratorHttpClient::new(config).await.unwrap();
    client
        .get(&RequestContext::background(), &ApiPath::new("health"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_no_auth_header_without_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ok(json!(null)))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .get(&RequestContext::background(), &ApiPath::new("health"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

// ============== Errors ==============

#[tokio::test]
async fn test_api_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/instance/db1/3306"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"Code": "ERROR", "Message": "Instance not found", "Details": null})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .get(
            &RequestContext::background(),
            &ApiPath::new("instance").segment("db1").segment(3306),
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "API error: Instance not found");
}

#[tokio::test]
async fn test_http_status_without_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal failure"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .get(&RequestContext::background(), &ApiPath::new("health"))
        .await
        .unwrap_err();
    match err {
        ClientError::HttpStatus { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "internal failure");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_http_status_with_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"Code": 0, "Message": "Backend down"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .get(&RequestContext::background(), &ApiPath::new("health"))
        .await
        .unwrap_err();
    assert_eq!(err.api_message(), Some("Backend down"));
}

#[tokio::test]
async fn test_integer_convention_rejects_text_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ok(json!(null)))
        .mount(&server)
        .await;

    let config = HttpClientConfig::new(&server.uri()).with_code_convention(CodeConvention::Integer);
    let client = OrchestratorHttpClient::new(config).await.unwrap();
    let err = client
        .get(&RequestContext::background(), &ApiPath::new("health"))
        .await
        .unwrap_err();
    assert!(err.api_message().is_some());
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = OrchestratorHttpClient::new(HttpClientConfig::new(&uri).with_timeouts(500, 1000))
        .await
        .unwrap();
    let err = client
        .get(&RequestContext::background(), &ApiPath::new("health"))
        .await
        .unwrap_err();
    assert!(err.is_transport());
}

// ============== Cancellation ==============

#[tokio::test]
async fn test_cancelled_context_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ok(json!(null)))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let ctx = RequestContext::background();
    ctx.cancel();

    let err = client.get(&ctx, &ApiPath::new("health")).await.unwrap_err();
    assert!(matches!(err, ClientError::Cancelled));
}

#[tokio::test]
async fn test_deadline_aborts_slow_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ok(json!(null)).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let ctx = RequestContext::with_timeout(Duration::from_millis(100));
    let err = client.get(&ctx, &ApiPath::new("health")).await.unwrap_err();
    assert!(matches!(err, ClientError::DeadlineExceeded));
}

// ============== Raw bodies ==============

#[tokio::test]
async fn test_get_bytes_returns_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/raft-snapshot"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8, 1, 2, 3]))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let bytes = client
        .get_bytes(&RequestContext::background(), &ApiPath::new("raft-snapshot"))
        .await
        .unwrap();
    assert_eq!(bytes, vec![0u8, 1, 2, 3]);
}

// ============== Leader resolution ==============

#[tokio::test]
async fn test_leader_resolution_picks_first_leader() {
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
        .and(path("/api/clusters"))
        .respond_with(ok(json!(["main"])))
        .expect(1)
        .mount(&leader)
        .await;

    let config = HttpClientConfig::with_endpoints(vec![follower.uri(), leader.uri()]);
    let client = OrchestratorHttpClient::new(config).await.unwrap();
    assert_eq!(client.leader(), Some(format!("{}/api", leader.uri())));

    let clusters: Vec<String> = client
        .get(&RequestContext::background(), &ApiPath::new("clusters"))
        .await
        .unwrap()
        .into_collection()
        .unwrap();
    assert_eq!(clusters, vec!["main"]);
}

#[tokio::test]
async fn test_leader_resolution_falls_back_to_routed_check() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;

    for server in [&first, &second] {
        Mock::given(method("GET"))
            .and(path("/api/leader-check"))
            .respond_with(ResponseTemplate::new(404))
            .mount(server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/api/routed-leader-check"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&second)
        .await;

    let config = HttpClientConfig::with_endpoints(vec![first.uri(), second.uri()]);
    let client = OrchestratorHttpClient::new(config).await.unwrap();
    assert_eq!(client.leader(), Some(format!("{}/api", second.uri())));
}

#[tokio::test]
async fn test_no_leader_fails_construction() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;

    let config = HttpClientConfig::with_endpoints(vec![first.uri(), second.uri()]);
    let result = OrchestratorHttpClient::new(config).await;
    assert!(matches!(result, Err(ClientError::NoLeader { .. })));
}

// ============== Metrics ==============

#[tokio::test]
async fn test_metrics_are_recorded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ok(json!(null)))
        .mount(&server)
        .await;

    let registry = prometheus::Registry::new();
    let metrics = Arc::new(RequestMetrics::new(&registry).unwrap());
    let client = client_for(&server).await.with_metrics(metrics.clone());

    client
        .get(&RequestContext::background(), &ApiPath::new("health"))
        .await
        .unwrap();

    assert_eq!(
        metrics
            .success_request_count
            .with_label_values(&["health"])
            .get(),
        1.0
    );
}
