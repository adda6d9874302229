//! Metrics and observability handlers
//!
//! Provides endpoints for collecting and exposing request and per-model
//! inference counters as JSON or Prometheus text.

use std::{
    fmt::Write as _,
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::AppState;

/// Metrics response containing all application metrics
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MetricsResponse {
    /// Application metadata
    pub app: AppMetrics,
    /// Request statistics
    pub requests: RequestMetrics,
    /// Per-model inference statistics
    pub models: ModelMetricsSet,
}

/// Application metadata
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AppMetrics {
    /// Application version
    pub version: String,
    /// Application name
    pub name: String,
    /// Uptime in seconds
    pub uptime_seconds: u64,
}

/// Request statistics
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RequestMetrics {
    /// Total requests received
    pub total_requests: u64,
    /// Successful requests (2xx)
    pub success_count: u64,
    /// Client errors (4xx)
    pub client_error_count: u64,
    /// Server errors (5xx)
    pub server_error_count: u64,
    /// Average response time in milliseconds
    pub avg_response_time_ms: f64,
    /// Current active requests
    pub active_requests: u64,
}

/// Inference statistics of a single model
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InferenceMetrics {
    /// Model name
    pub model: String,
    /// Whether the model is loaded
    pub ready: bool,
    /// Total inference requests
    pub total_inferences: u64,
    /// Successful inferences
    pub successful_inferences: u64,
    /// Failed inferences
    pub failed_inferences: u64,
    /// Average inference time in milliseconds
    pub avg_inference_time_ms: f64,
}

/// Inference statistics of every model
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ModelMetricsSet {
    pub crop: InferenceMetrics,
    pub fertilizer: InferenceMetrics,
    pub plant: InferenceMetrics,
}

/// Model an inference was recorded for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Crop,
    Fertilizer,
    Plant,
}

impl ModelKind {
    /// Label used in Prometheus output
    pub const fn label(self) -> &'static str {
        match self {
            Self::Crop => "crop",
            Self::Fertilizer => "fertilizer",
            Self::Plant => "plant",
        }
    }
}

#[derive(Debug, Default)]
struct InferenceCounters {
    total: AtomicU64,
    successful: AtomicU64,
    failed: AtomicU64,
    total_time_us: AtomicU64,
}

impl InferenceCounters {
    fn record(&self, success: bool, duration_us: u64) {
        self.total.fetch_add(1, Ordering::Relaxed);
        self.total_time_us.fetch_add(duration_us, Ordering::Relaxed);
        if success {
            self.successful.fetch_add(1, Ordering::Relaxed);
        } else {
            self.failed.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn snapshot(&self, model: String, ready: bool) -> InferenceMetrics {
        let total = self.total.load(Ordering::Relaxed);
        let total_time = self.total_time_us.load(Ordering::Relaxed);
        InferenceMetrics {
            model,
            ready,
            total_inferences: total,
            successful_inferences: self.successful.load(Ordering::Relaxed),
            failed_inferences: self.failed.load(Ordering::Relaxed),
            avg_inference_time_ms: average_ms(total_time, total),
        }
    }
}

fn average_ms(total_us: u64, count: u64) -> f64 {
    if count > 0 {
        (total_us as f64) / (count as f64) / 1000.0
    } else {
        0.0
    }
}

/// Atomic counters for request and inference metrics
#[derive(Debug)]
pub struct MetricsCollector {
    /// Server start time
    start_time: Instant,
    /// Total requests
    total_requests: AtomicU64,
    /// Successful requests
    success_count: AtomicU64,
    /// Client errors
    client_error_count: AtomicU64,
    /// Server errors
    server_error_count: AtomicU64,
    /// Active requests
    active_requests: AtomicU64,
    /// Total response time in microseconds
    total_response_time_us: AtomicU64,
    crop: InferenceCounters,
    fertilizer: InferenceCounters,
    plant: InferenceCounters,
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsCollector {
    /// Create a new metrics collector
    #[must_use]
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            total_requests: AtomicU64::new(0),
            success_count: AtomicU64::new(0),
            client_error_count: AtomicU64::new(0),
            server_error_count: AtomicU64::new(0),
            active_requests: AtomicU64::new(0),
            total_response_time_us: AtomicU64::new(0),
            crop: InferenceCounters::default(),
            fertilizer: InferenceCounters::default(),
            plant: InferenceCounters::default(),
        }
    }

    /// Record start of a request
    pub fn request_start(&self) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
        self.active_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Record end of a request
    pub fn request_end(&self, response_time_us: u64, status_code: u16) {
        self.active_requests.fetch_sub(1, Ordering::Relaxed);
        self.total_response_time_us
            .fetch_add(response_time_us, Ordering::Relaxed);

        match status_code {
            200..=299 => {
                self.success_count.fetch_add(1, Ordering::Relaxed);
            },
            400..=499 => {
                self.client_error_count.fetch_add(1, Ordering::Relaxed);
            },
            500..=599 => {
                self.server_error_count.fetch_add(1, Ordering::Relaxed);
            },
            _ => {},
        }
    }

    const fn counters(&self, kind: ModelKind) -> &InferenceCounters {
        match kind {
            ModelKind::Crop => &self.crop,
            ModelKind::Fertilizer => &self.fertilizer,
            ModelKind::Plant => &self.plant,
        }
    }

    /// Record an inference operation
    pub fn record_inference(&self, kind: ModelKind, success: bool, duration_us: u64) {
        self.counters(kind).record(success, duration_us);
    }

    /// Get uptime in seconds
    #[must_use]
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Get request metrics
    #[must_use]
    pub fn request_metrics(&self) -> RequestMetrics {
        let total = self.total_requests.load(Ordering::Relaxed);
        let total_time = self.total_response_time_us.load(Ordering::Relaxed);

        RequestMetrics {
            total_requests: total,
            success_count: self.success_count.load(Ordering::Relaxed),
            client_error_count: self.client_error_count.load(Ordering::Relaxed),
            server_error_count: self.server_error_count.load(Ordering::Relaxed),
            avg_response_time_ms: average_ms(total_time, total),
            active_requests: self.active_requests.load(Ordering::Relaxed),
        }
    }

    /// Get inference metrics of one model
    #[must_use]
    pub fn inference_metrics(&self, kind: ModelKind, model: String, ready: bool) -> InferenceMetrics {
        self.counters(kind).snapshot(model, ready)
    }
}

fn model_metrics(state: &AppState) -> ModelMetricsSet {
    let metrics = state.metrics.as_ref();
    ModelMetricsSet {
        crop: metrics.inference_metrics(
            ModelKind::Crop,
            state.crop_service.model_name(),
            state.crop_service.is_ready(),
        ),
        fertilizer: metrics.inference_metrics(
            ModelKind::Fertilizer,
            state.fertilizer_service.model_name(),
            state.fertilizer_service.is_ready(),
        ),
        plant: metrics.inference_metrics(
            ModelKind::Plant,
            state.plant_service.model_name(),
            state.plant_service.is_ready(),
        ),
    }
}

/// Get metrics endpoint
#[utoipa::path(
    get,
    path = "/metrics",
    tag = "metrics",
    responses(
        (status = 200, description = "Application metrics", body = MetricsResponse)
    )
)]
pub async fn get_metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
    let metrics = state.metrics.as_ref();

    Json(MetricsResponse {
        app: AppMetrics {
            version: env!("CARGO_PKG_VERSION").to_string(),
            name: env!("CARGO_PKG_NAME").to_string(),
            uptime_seconds: metrics.uptime_seconds(),
        },
        requests: metrics.request_metrics(),
        models: model_metrics(&state),
    })
}

/// Prometheus-style metrics endpoint
#[utoipa::path(
    get,
    path = "/metrics/prometheus",
    tag = "metrics",
    responses(
        (status = 200, description = "Prometheus metrics", content_type = "text/plain")
    )
)]
pub async fn get_metrics_prometheus(State(state): State<AppState>) -> String {
    let metrics = state.metrics.as_ref();
    render_prometheus(
        metrics.uptime_seconds(),
        &metrics.request_metrics(),
        &model_metrics(&state),
    )
}

fn render_prometheus(uptime: u64, requests: &RequestMetrics, models: &ModelMetricsSet) -> String {
    let mut output = String::new();

    let mut scalar = |name: &str, help: &str, kind: &str, value: String| {
        let _ = write!(
            output,
            "# HELP {name} {help}\n# TYPE {name} {kind}\n{name} {value}\n\n"
        );
    };

    scalar(
        "app_uptime_seconds",
        "Application uptime in seconds",
        "counter",
        uptime.to_string(),
    );
    scalar(
        "http_requests_total",
        "Total HTTP requests",
        "counter",
        requests.total_requests.to_string(),
    );
    scalar(
        "http_requests_success_total",
        "Successful HTTP requests",
        "counter",
        requests.success_count.to_string(),
    );
    scalar(
        "http_requests_client_error_total",
        "Client error HTTP requests",
        "counter",
        requests.client_error_count.to_string(),
    );
    scalar(
        "http_requests_server_error_total",
        "Server error HTTP requests",
        "counter",
        requests.server_error_count.to_string(),
    );
    scalar(
        "http_requests_active",
        "Current active HTTP requests",
        "gauge",
        requests.active_requests.to_string(),
    );
    scalar(
        "http_response_time_avg_ms",
        "Average response time in milliseconds",
        "gauge",
        format!("{:.2}", requests.avg_response_time_ms),
    );

    let per_model = [
        (ModelKind::Crop, &models.crop),
        (ModelKind::Fertilizer, &models.fertilizer),
        (ModelKind::Plant, &models.plant),
    ];

    let families: [(&str, &str, &str, fn(&InferenceMetrics) -> String); 5] = [
        (
            "inference_requests_total",
            "Total inference requests",
            "counter",
            |m| m.total_inferences.to_string(),
        ),
        (
            "inference_requests_success_total",
            "Successful inference requests",
            "counter",
            |m| m.successful_inferences.to_string(),
        ),
        (
            "inference_requests_failed_total",
            "Failed inference requests",
            "counter",
            |m| m.failed_inferences.to_string(),
        ),
        (
            "inference_time_avg_ms",
            "Average inference time in milliseconds",
            "gauge",
            |m| format!("{:.2}", m.avg_inference_time_ms),
        ),
        (
            "model_ready",
            "Whether the model is loaded",
            "gauge",
            |m| i32::from(m.ready).to_string(),
        ),
    ];

    for (name, help, kind, value) in families {
        let _ = writeln!(output, "# HELP {name} {help}\n# TYPE {name} {kind}");
        for (model, m) in per_model {
            let _ = writeln!(output, "{name}{{model=\"{}\"}} {}", model.label(), value(m));
        }
        output.push('\n');
    }

    output
}
