// orchestrator-client: Typed client for the orchestrator MySQL topology management REST API

pub mod client;
pub mod config;
pub mod constants;
pub mod model;

pub use client::OrchestratorClient;
pub use config::OrchestratorClientConfig;
pub use model::InstanceKey;
pub use orchestrator_http::{
    ApiResponse, CancellationToken, ClientError, CodeConvention, RequestContext, RequestMetrics,
    Result,
};
