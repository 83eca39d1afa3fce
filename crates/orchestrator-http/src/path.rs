//! Positional API paths

use std::fmt;

/// Ordered path segments below the `/api` root.
///
/// Segments are stored raw and percent-encoded one by one when the transport
/// appends them to the leader URL, so free-form values such as downtime
/// reasons or tag values may contain spaces or slashes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiPath {
    segments: Vec<String>,
}

impl ApiPath {
    /// Start a path from an endpoint name such as `begin-downtime` or `audit-recovery/uid`
    pub fn new(endpoint: &str) -> Self {
        Self {
            segments: endpoint
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Append one positional parameter
    pub fn segment(mut self, value: impl fmt::Display) -> Self {
        self.segments.push(value.to_string());
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Endpoint name used as the metrics label
    pub fn operation(&self) -> &str {
        self.segments.first().map(String::as_str).unwrap_or("")
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}
