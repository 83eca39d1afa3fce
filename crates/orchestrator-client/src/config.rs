// Configuration for OrchestratorClient

use std::collections::HashMap;

use orchestrator_http::{ClientError, CodeConvention, HttpClientConfig, Result};
use serde::Deserialize;

use crate::constants::env;

/// Configuration for the orchestrator client
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct OrchestratorClientConfig {
    /// Orchestrator address used when `endpoints` is empty (default: "http://127.0.0.1:3000")
    pub base_url: String,
    /// Raft member addresses; the leader among them is pinned
    pub endpoints: Vec<String>,
    /// Username for basic authentication
    pub username: String,
    /// Password for basic authentication
    pub password: String,
    /// Static headers sent with every request
    pub headers: HashMap<String, String>,
    /// Connection timeout in milliseconds (default: 5000)
    pub connect_timeout_ms: u64,
    /// Request timeout in milliseconds (default: 30000)
    pub timeout_ms: u64,
    /// Skip TLS certificate verification
    pub insecure_skip_verify: bool,
    /// Path prefix in front of `/api`
    pub url_prefix: String,
    /// How the envelope `Code` is interpreted (default: auto)
    pub code_convention: CodeConvention,
}

impl Default for OrchestratorClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            endpoints: Vec::new(),
            username: String::new(),
            password: String::new(),
            headers: HashMap::new(),
            connect_timeout_ms: 5000,
            timeout_ms: 30000,
            insecure_skip_verify: false,
            url_prefix: String::new(),
            code_convention: CodeConvention::Auto,
        }
    }
}

impl OrchestratorClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    /// Config for `host` (e.g. "orc.example.com:3000") over http or https
    pub fn from_host(host: &str, use_https: bool) -> Self {
        let scheme = if use_https { "https" } else { "http" };
        Self::new(&format!("{}://{}", scheme, host.trim().trim_end_matches('/')))
    }

    /// Parse a TOML document; absent keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ClientError::Config(e.to_string()))
    }

    /// Read `ORCHESTRATOR_*` environment variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(api) = lookup(env::API) {
            let endpoints = split_endpoints(&api);
            match endpoints.len() {
                0 => {}
                1 => config.base_url = endpoints[0].clone(),
                _ => config.endpoints = endpoints,
            }
        }
        if let Some(user) = lookup(env::USER) {
            config.username = user;
        }
        if let Some(password) = lookup(env::PASSWORD) {
            config.password = password;
        }
        if let Some(secs) = lookup(env::TIMEOUT_SECS) {
            let invalid = || ClientError::Config(format!("invalid {}: {}", env::TIMEOUT_SECS, secs));
            let parsed: u64 = secs.trim().parse().map_err(|_| invalid())?;
            config.timeout_ms = parsed.checked_mul(1000).ok_or_else(invalid)?;
        }
        if let Some(insecure) = lookup(env::INSECURE) {
            config.insecure_skip_verify = parse_flag(&insecure);
        }
        if let Some(prefix) = lookup(env::URL_PREFIX) {
            config.url_prefix = prefix;
        }

        Ok(config)
    }

    pub fn with_endpoints(mut self, endpoints: Vec<String>) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_auth(mut self, username: &str, password: &str) -> Self {
        self.username = username.to_string();
        self.password = password.to_string();
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_timeouts(mut self, connect_ms: u64, timeout_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_insecure_skip_verify(mut self, insecure: bool) -> Self {
        self.insecure_skip_verify = insecure;
        self
    }

    pub fn with_url_prefix(mut self, prefix: &str) -> Self {
        self.url_prefix = prefix.to_string();
        self
    }

    pub fn with_code_convention(mut self, convention: CodeConvention) -> Self {
        self.code_convention = convention;
        self
    }

    /// Transport configuration derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        let mut http_config = HttpClientConfig::new(&self.base_url)
            .with_auth(&self.username, &self.password)
            .with_timeouts(self.connect_timeout_ms, self.timeout_ms)
            .with_url_prefix(&self.url_prefix)
            .with_insecure_skip_verify(self.insecure_skip_verify)
            .with_code_convention(self.code_convention);
        http_config.endpoints = self.endpoints.clone();
        for (name, value) in &self.headers {
            http_config = http_config.with_header(name, value);
        }
        http_config
    }
}

fn split_endpoints(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
