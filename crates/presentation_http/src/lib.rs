//! AgriAI HTTP presentation layer
//!
//! Routes, handlers and error mapping for the crop, fertilizer and
//! medicinal plant endpoints.

pub mod coerce;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod shutdown;
pub mod state;

pub use error::{ApiError, ErrorResponse, set_expose_internal_errors};
pub use middleware::ValidatedJson;
pub use routes::{cors_layer, create_router};
pub use state::AppState;
