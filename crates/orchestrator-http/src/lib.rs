// orchestrator-http: Transport, envelope decoding and leader resolution for the orchestrator REST API

pub mod context;
pub mod envelope;
pub mod error;
pub mod http;
pub mod leader;
pub mod metrics;
pub mod path;

pub use context::RequestContext;
pub use envelope::{ApiResponse, CodeConvention, decode_envelope};
pub use error::{ClientError, Result};
pub use http::{HttpClientConfig, OrchestratorHttpClient};
pub use leader::{LeaderProbe, LeaderResolver, normalize_endpoint};
pub use metrics::RequestMetrics;
pub use path::ApiPath;

pub use tokio_util::sync::CancellationToken;
