//! Leader resolution across multiple orchestrator endpoints
//!
//! In a raft deployment only the leader serves writes. Given several
//! candidate endpoints the resolver asks each one in order whether it is the
//! leader (`leader-check`), then whether it can route to one
//! (`routed-leader-check`), and pins the first affirmative endpoint.

use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{ClientError, Result};

/// Total time budget for one resolution pass over all candidates
pub const LEADER_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

pub const LEADER_CHECK_PATH: &str = "leader-check";
pub const ROUTED_LEADER_CHECK_PATH: &str = "routed-leader-check";

/// Asks a single endpoint about leadership
#[async_trait]
pub trait LeaderProbe: Send + Sync {
    /// `GET {endpoint}/leader-check` answered with HTTP 200
    async fn is_leader(&self, endpoint: &str) -> bool;

    /// `GET {endpoint}/routed-leader-check` answered with HTTP 200
    async fn has_routed_leader(&self, endpoint: &str) -> bool;
}

/// Normalize an endpoint into the `.../api` root all paths hang off.
///
/// Whitespace and trailing slashes are stripped, `url_prefix` (for example
/// `/orchestrator`) is inserted when missing, and `/api` is appended once.
pub fn normalize_endpoint(raw: &str, url_prefix: &str) -> String {
    let mut url = raw.trim().trim_end_matches('/').to_string();
    if url.ends_with("/api") {
        return url;
    }

    let prefix = url_prefix.trim().trim_matches('/');
    if !prefix.is_empty() && !url.ends_with(&format!("/{prefix}")) {
        url.push('/');
        url.push_str(prefix);
    }
    url.push_str("/api");
    url
}

/// Holds the candidate endpoints and the currently pinned leader
#[derive(Debug)]
pub struct LeaderResolver {
    candidates: Vec<String>,
    fallback: String,
    pinned: RwLock<Option<String>>,
    probe_timeout: Duration,
}

impl LeaderResolver {
    pub fn new(base_url: &str, endpoints: &[String], url_prefix: &str) -> Self {
        let candidates: Vec<String> = endpoints
            .iter()
            .filter(|e| !e.trim().is_empty())
            .map(|e| normalize_endpoint(e, url_prefix))
            .collect();
        let fallback = normalize_endpoint(base_url, url_prefix);
        // Several candidates stay unpinned until a probe confirms one
        let initial = match candidates.as_slice() {
            [] => Some(fallback.clone()),
            [only] => Some(only.clone()),
            _ => None,
        };

        Self {
            candidates,
            fallback,
            pinned: RwLock::new(initial),
            probe_timeout: LEADER_PROBE_TIMEOUT,
        }
    }

    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// More than one candidate, so resolution has to ask the servers
    pub fn needs_probe(&self) -> bool {
        self.candidates.len() > 1
    }

    /// The pinned leader URL, including the `/api` root
    pub fn current(&self) -> Option<String> {
        self.pinned.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// The pinned leader, or `NoLeader` while resolution has not succeeded
    pub fn require_current(&self) -> Result<String> {
        self.current().ok_or_else(|| ClientError::NoLeader {
            candidates: self.candidates.clone(),
        })
    }

    /// Every URL requests may be sent to: the candidates, or the base URL when there are none
    pub fn urls(&self) -> &[String] {
        if self.candidates.is_empty() {
            std::slice::from_ref(&self.fallback)
        } else {
            &self.candidates
        }
    }

    fn pin(&self, leader: String) {
        let mut pinned = self.pinned.write().unwrap_or_else(|e| e.into_inner());
        if pinned.as_deref() != Some(leader.as_str()) {
            debug!("Pinned orchestrator leader: {} (was {:?})", leader, *pinned);
        }
        *pinned = Some(leader);
    }

    /// Resolve and pin the leader, returning its URL
    pub async fn resolve<P>(&self, probe: &P) -> Result<String>
    where
        P: LeaderProbe + ?Sized,
    {
        let leader = match self.candidates.as_slice() {
            [] => self.fallback.clone(),
            [only] => only.clone(),
            _ => self.detect(probe).await?,
        };
        self.pin(leader.clone());
        Ok(leader)
    }

    async fn detect<P>(&self, probe: &P) -> Result<String>
    where
        P: LeaderProbe + ?Sized,
    {
        let deadline = tokio::time::Instant::now() + self.probe_timeout;

        for endpoint in &self.candidates {
            let answered = tokio::time::timeout_at(deadline, probe.is_leader(endpoint)).await;
            if answered.unwrap_or(false) {
                debug!("Endpoint {} reports leadership", endpoint);
                return Ok(endpoint.clone());
            }
        }

        for endpoint in &self.candidates {
            let answered =
                tokio::time::timeout_at(deadline, probe.has_routed_leader(endpoint)).await;
            if answered.unwrap_or(false) {
                debug!("Endpoint {} routes to the leader", endpoint);
                return Ok(endpoint.clone());
            }
        }

        warn!(
            "No leader found among {} orchestrator endpoints",
            self.candidates.len()
        );
        Err(ClientError::NoLeader {
            candidates: self.candidates.clone(),
        })
    }
}
