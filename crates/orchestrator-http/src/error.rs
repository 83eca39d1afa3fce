//! Error types for orchestrator API calls

/// Error type for every orchestrator client operation
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("transport error: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    #[error("HTTP error {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("API error: {message}")]
    Api { message: String },

    #[error("failed to decode {target}: {source}")]
    Decode {
        target: &'static str,
        source: serde_json::Error,
    },

    #[error("no details in response")]
    MissingDetails,

    #[error("unexpected details: expected {expected}, found {found}")]
    UnexpectedDetails {
        expected: &'static str,
        found: &'static str,
    },

    #[error("no leader found among endpoints: {}", candidates.join(", "))]
    NoLeader { candidates: Vec<String> },

    #[error("request cancelled")]
    Cancelled,

    #[error("request deadline exceeded")]
    DeadlineExceeded,

    #[error("invalid instance key: {0}")]
    InvalidInstanceKey(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Network, connect, timeout or TLS failure before an HTTP response was read
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// The caller's context was cancelled or its deadline passed
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled | Self::DeadlineExceeded)
    }

    /// Any failure converting an envelope's details into the requested shape
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            Self::Decode { .. } | Self::MissingDetails | Self::UnexpectedDetails { .. }
        )
    }

    /// The server-provided message of an envelope error
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message } => Some(message),
            _ => None,
        }
    }

    /// HTTP status of a non-envelope error response
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Low-cardinality label used for metrics and logs
    pub fn class(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport",
            Self::HttpStatus { .. } => "http_status",
            Self::Api { .. } => "api",
            Self::Decode { .. } | Self::MissingDetails | Self::UnexpectedDetails { .. } => {
                "decode"
            }
            Self::NoLeader { .. } => "no_leader",
            Self::Cancelled | Self::DeadlineExceeded => "cancelled",
            Self::InvalidInstanceKey(_) | Self::InvalidUrl(_) | Self::Config(_) => "invalid_input",
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
