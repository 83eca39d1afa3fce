//! HTTP transport for the orchestrator REST API
//!
//! Builds URLs from [`ApiPath`]s on top of the pinned leader, applies basic
//! auth and static headers, races each exchange against the caller's
//! [`RequestContext`] and hands the body to the envelope decoder.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::context::RequestContext;
use crate::envelope::{ApiResponse, CodeConvention, body_snippet, decode_envelope};
use crate::error::{ClientError, Result};
use crate::leader::{LEADER_CHECK_PATH, LeaderProbe, LeaderResolver, ROUTED_LEADER_CHECK_PATH};
use crate::metrics::{RequestMetrics, Timer};
use crate::path::ApiPath;

/// Configuration for the HTTP transport
#[derive(Clone, Debug)]
pub struct HttpClientConfig {
    /// Base URL used when no endpoints are listed
    pub base_url: String,
    /// Candidate endpoints of a raft deployment, probed for the leader
    pub endpoints: Vec<String>,
    /// Path prefix in front of `/api` (e.g., "/orchestrator")
    pub url_prefix: String,
    /// Username for basic authentication
    pub username: String,
    /// Password for basic authentication
    pub password: String,
    /// Static headers added to every request
    pub headers: HashMap<String, String>,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Total request timeout in milliseconds
    pub timeout_ms: u64,
    /// Accept invalid TLS certificates
    pub insecure_skip_verify: bool,
    /// Interpretation of the envelope's `Code` field
    pub code_convention: CodeConvention,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            endpoints: Vec::new(),
            url_prefix: String::new(),
            username: String::new(),
            password: String::new(),
            headers: HashMap::new(),
            connect_timeout_ms: 5000,
            timeout_ms: 30000,
            insecure_skip_verify: false,
            code_convention: CodeConvention::Auto,
        }
    }
}

impl HttpClientConfig {
    /// Create a new config for a single orchestrator
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    /// Create a config probing several endpoints for the leader
    pub fn with_endpoints(endpoints: Vec<String>) -> Self {
        Self {
            endpoints,
            ..Default::default()
        }
    }

    /// Set basic authentication credentials
    pub fn with_auth(mut self, username: &str, password: &str) -> Self {
        self.username = username.to_string();
        self.password = password.to_string();
        self
    }

    /// Add a static header
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    /// Set timeouts
    pub fn with_timeouts(mut self, connect_ms: u64, timeout_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set the path prefix in front of `/api`
    pub fn with_url_prefix(mut self, prefix: &str) -> Self {
        self.url_prefix = prefix.to_string();
        self
    }

    pub fn with_insecure_skip_verify(mut self, insecure: bool) -> Self {
        self.insecure_skip_verify = insecure;
        self
    }

    pub fn with_code_convention(mut self, convention: CodeConvention) -> Self {
        self.code_convention = convention;
        self
    }
}

/// HTTP client pinned to the orchestrator leader
pub struct OrchestratorHttpClient {
    client: Client,
    config: HttpClientConfig,
    headers: HeaderMap,
    leader: LeaderResolver,
    metrics: Option<Arc<RequestMetrics>>,
}

impl OrchestratorHttpClient {
    /// Create a new client and resolve the leader
    pub async fn new(config: HttpClientConfig) -> Result<Self> {
        let instance = Self::new_without_probe(config)?;
        instance.refresh_leader().await?;
        Ok(instance)
    }

    /// Create a client without asking any server.
    ///
    /// With several endpoints nothing is pinned and requests fail with
    /// `NoLeader` until [`refresh_leader`](Self::refresh_leader) succeeds.
    pub fn new_without_probe(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.timeout_ms))
            .danger_accept_invalid_certs(config.insecure_skip_verify)
            .build()?;

        let headers = build_headers(&config.headers)?;
        let leader = LeaderResolver::new(&config.base_url, &config.endpoints, &config.url_prefix);
        for url in leader.urls() {
            Url::parse(url).map_err(|e| ClientError::InvalidUrl(format!("{url}: {e}")))?;
        }

        Ok(Self {
            client,
            config,
            headers,
            leader,
            metrics: None,
        })
    }

    /// Record request metrics on `metrics`
    pub fn with_metrics(mut self, metrics: Arc<RequestMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// The pinned leader URL, including the `/api` root
    pub fn leader(&self) -> Option<String> {
        self.leader.current()
    }

    pub fn leader_candidates(&self) -> &[String] {
        self.leader.candidates()
    }

    /// Re-run leader resolution and pin the result
    pub async fn refresh_leader(&self) -> Result<String> {
        let result = self.leader.resolve(self).await;
        if let Some(metrics) = &self.metrics {
            metrics.record_leader_resolution(result.is_ok());
        }
        result
    }

    /// Build full URL on the pinned leader, encoding each segment
    pub fn build_url(&self, path: &ApiPath) -> Result<Url> {
        if let Some(dot) = path.segments().iter().find(|s| *s == "." || *s == "..") {
            return Err(ClientError::InvalidUrl(format!(
                "dot segment {dot:?} in {path}"
            )));
        }
        let leader = self.leader.require_current()?;
        let mut url =
            Url::parse(&leader).map_err(|e| ClientError::InvalidUrl(format!("{leader}: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(leader.clone()))?
            .pop_if_empty()
            .extend(path.segments());
        Ok(url)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = if !self.config.username.is_empty() || !self.config.password.is_empty() {
            builder.basic_auth(&self.config.username, Some(&self.config.password))
        } else {
            builder
        };
        builder.headers(self.headers.clone())
    }

    /// Send the request and read the whole body, honouring the context
    async fn execute<B>(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &ApiPath,
        body: Option<&B>,
    ) -> Result<(StatusCode, Vec<u8>)>
    where
        B: Serialize + ?Sized,
    {
        ctx.check()?;

        let url = self.build_url(path)?;
        debug!("Dispatching {} {}", method, url);

        let mut request = self.authorize(self.client.request(method, url));
        if let Some(body) = body {
            request = request.json(body);
        }

        ctx.run(async move {
            let response = request.send().await?;
            let status = response.status();
            let bytes = response.bytes().await?;
            Ok::<_, ClientError>((status, bytes.to_vec()))
        })
        .await
    }

    async fn request_envelope<B>(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &ApiPath,
        body: Option<&B>,
    ) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let timer = self.metrics.as_deref().map(|m| Timer::start(m, path.operation()));

        let result = match self.execute(ctx, method, path, body).await {
            Ok((status, bytes)) => decode_envelope(status.as_u16(), &bytes, self.config.code_convention),
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            warn!("Orchestrator request {} failed: {}", path, e);
        }
        if let Some(timer) = timer {
            timer.finish(&result);
        }
        result
    }

    /// Make a GET request and decode the envelope
    pub async fn get(&self, ctx: &RequestContext, path: &ApiPath) -> Result<ApiResponse> {
        self.request_envelope::<()>(ctx, Method::GET, path, None).await
    }

    /// Make a POST request with JSON body and decode the envelope
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        ctx: &RequestContext,
        path: &ApiPath,
        body: &B,
    ) -> Result<ApiResponse> {
        self.request_envelope(ctx, Method::POST, path, Some(body)).await
    }

    /// Make a GET request returning the raw body of a non-envelope endpoint
    pub async fn get_bytes(&self, ctx: &RequestContext, path: &ApiPath) -> Result<Vec<u8>> {
        let timer = self.metrics.as_deref().map(|m| Timer::start(m, path.operation()));

        let result = match self.execute::<()>(ctx, Method::GET, path, None).await {
            Ok((status, bytes)) => raw_body(status, bytes),
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            warn!("Orchestrator request {} failed: {}", path, e);
        }
        if let Some(timer) = timer {
            timer.finish(&result);
        }
        result
    }

    /// Make a GET request returning the raw body as text
    pub async fn get_text(&self, ctx: &RequestContext, path: &ApiPath) -> Result<String> {
        let bytes = self.get_bytes(ctx, path).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    async fn probe(&self, endpoint: &str, check: &str) -> bool {
        let url = format!("{}/{}", endpoint.trim_end_matches('/'), check);
        match self.authorize(self.client.get(&url)).send().await {
            Ok(response) => response.status() == StatusCode::OK,
            Err(e) => {
                warn!("Leader probe {} failed: {}", url, e);
                false
            }
        }
    }
}

#[async_trait]
impl LeaderProbe for OrchestratorHttpClient {
    async fn is_leader(&self, endpoint: &str) -> bool {
        self.probe(endpoint, LEADER_CHECK_PATH).await
    }

    async fn has_routed_leader(&self, endpoint: &str) -> bool {
        self.probe(endpoint, ROUTED_LEADER_CHECK_PATH).await
    }
}

fn raw_body(status: StatusCode, bytes: Vec<u8>) -> Result<Vec<u8>> {
    if status.as_u16() < 400 {
        return Ok(bytes);
    }
    Err(match ApiResponse::parse(&bytes) {
        Some(envelope) => ClientError::Api {
            message: envelope.message,
        },
        None => ClientError::HttpStatus {
            status: status.as_u16(),
            body: body_snippet(&bytes),
        },
    })
}

fn build_headers(headers: &HashMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ClientError::Config(format!("invalid header name {name:?}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ClientError::Config(format!("invalid value for header {name}: {e}")))?;
        map.insert(name, value);
    }
    Ok(map)
}
