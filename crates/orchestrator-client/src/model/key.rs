// Instance key model types

use std::fmt;
use std::str::FromStr;

use orchestrator_http::ClientError;
use serde::{Deserialize, Serialize};

/// Unique identifier of a MySQL instance: `hostname:port`
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InstanceKey {
    pub hostname: String,
    pub port: u16,
}

impl InstanceKey {
    pub fn new(hostname: impl Into<String>, port: u16) -> Self {
        Self {
            hostname: hostname.into(),
            port,
        }
    }

    /// A key with an empty hostname, as returned by orchestrator for "no instance"
    pub fn is_empty(&self) -> bool {
        self.hostname.is_empty()
    }
}

impl fmt::Display for InstanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.hostname, self.port)
    }
}

impl FromStr for InstanceKey {
    type Err = ClientError;

    /// Parse `hostname:port`; exactly one colon, a non-empty host and a canonical decimal port
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let (Some(hostname), Some(port), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ClientError::InvalidInstanceKey(format!(
                "expected hostname:port, got {s:?}"
            )));
        };
        if hostname.is_empty() {
            return Err(ClientError::InvalidInstanceKey(format!(
                "empty hostname in {s:?}"
            )));
        }
        let invalid_port = || ClientError::InvalidInstanceKey(format!("invalid port in {s:?}"));
        // Canonical decimal only, so parse and Display round-trip
        if !port.bytes().all(|b| b.is_ascii_digit()) || (port.len() > 1 && port.starts_with('0')) {
            return Err(invalid_port());
        }
        let port = port.parse::<u16>().map_err(|_| invalid_port())?;

        Ok(Self::new(hostname, port))
    }
}

impl TryFrom<&str> for InstanceKey {
    type Error = ClientError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Parse `hostname:port` strings, silently skipping malformed entries
pub fn parse_instance_keys<I, S>(values: I) -> Vec<InstanceKey>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .filter_map(|v| v.as_ref().parse().ok())
        .collect()
}
