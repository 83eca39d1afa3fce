//! Prometheus metrics for orchestrator API calls
//!
//! Provides metrics collection for:
//! - Request latency (histogram)
//! - Successful and failed request counts (counters)
//! - Leader resolutions (counter)
//!
//! Metrics are registered on a caller-supplied [`Registry`], never on the
//! process-global default registry.

use std::time::{Duration, Instant};

use prometheus::{CounterVec, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder};

use crate::error::ClientError;

/// Prometheus metrics collector for one or more clients
pub struct RequestMetrics {
    /// Request latency histogram
    pub request_latency: HistogramVec,

    /// Failed request count counter
    pub failed_request_count: CounterVec,

    /// Success request count counter
    pub success_request_count: CounterVec,

    /// Leader resolution counter
    pub leader_resolution_count: CounterVec,

    registry: Registry,
}

impl RequestMetrics {
    /// Create the collectors and register them on `registry`
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let request_latency = HistogramVec::new(
            HistogramOpts::new(
                "orchestrator_client_request_latency_seconds",
                "Orchestrator API request latency in seconds",
            ),
            &["operation", "status"],
        )?;

        let failed_request_count = CounterVec::new(
            Opts::new(
                "orchestrator_client_failed_requests_total",
                "Total number of failed orchestrator API requests",
            ),
            &["operation", "error_type"],
        )?;

        let success_request_count = CounterVec::new(
            Opts::new(
                "orchestrator_client_success_requests_total",
                "Total number of successful orchestrator API requests",
            ),
            &["operation"],
        )?;

        let leader_resolution_count = CounterVec::new(
            Opts::new(
                "orchestrator_client_leader_resolutions_total",
                "Total number of leader resolutions",
            ),
            &["status"],
        )?;

        registry.register(Box::new(request_latency.clone()))?;
        registry.register(Box::new(failed_request_count.clone()))?;
        registry.register(Box::new(success_request_count.clone()))?;
        registry.register(Box::new(leader_resolution_count.clone()))?;

        Ok(Self {
            request_latency,
            failed_request_count,
            success_request_count,
            leader_resolution_count,
            registry: registry.clone(),
        })
    }

    /// Record request latency
    pub fn record_latency(&self, operation: &str, status: &str, duration: Duration) {
        self.request_latency
            .with_label_values(&[operation, status])
            .observe(duration.as_secs_f64());
    }

    /// Increment failed request count
    pub fn increment_failed_request(&self, operation: &str, error_type: &str) {
        self.failed_request_count
            .with_label_values(&[operation, error_type])
            .inc();
    }

    /// Increment success request count
    pub fn increment_success_request(&self, operation: &str) {
        self.success_request_count
            .with_label_values(&[operation])
            .inc();
    }

    pub fn record_leader_resolution(&self, success: bool) {
        let status = if success { "success" } else { "error" };
        self.leader_resolution_count
            .with_label_values(&[status])
            .inc();
    }

    /// Get metrics of the backing registry in Prometheus text format
    pub fn gather(&self) -> Result<String, prometheus::Error> {
        TextEncoder::new().encode_to_string(&self.registry.gather())
    }
}

/// Measures one request and records its outcome
pub struct Timer<'a> {
    metrics: &'a RequestMetrics,
    operation: String,
    start: Instant,
}

impl<'a> Timer<'a> {
    pub fn start(metrics: &'a RequestMetrics, operation: &str) -> Self {
        Self {
            metrics,
            operation: operation.to_string(),
            start: Instant::now(),
        }
    }

    /// Stop the timer and record success
    pub fn success(self) {
        let duration = self.start.elapsed();
        self.metrics
            .record_latency(&self.operation, "success", duration);
        self.metrics.increment_success_request(&self.operation);
    }

    /// Stop the timer and record failure, labelled by error class
    pub fn failure(self, error: &ClientError) {
        let duration = self.start.elapsed();
        self.metrics
            .record_latency(&self.operation, "error", duration);
        self.metrics
            .increment_failed_request(&self.operation, error.class());
    }

    /// Record the outcome of `result`
    pub fn finish<T>(self, result: &Result<T, ClientError>) {
        match result {
            Ok(_) => self.success(),
            Err(e) => self.failure(e),
        }
    }
}
