//! HTTP middleware components
//!
//! Request body validation and request counting.

pub mod request_metrics;
pub mod validation;

pub use request_metrics::track_requests;
pub use validation::ValidatedJson;
