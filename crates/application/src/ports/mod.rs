//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! the model runtime. Adapters in the infrastructure layer implement them.

mod image_model_port;
mod tabular_model_port;

#[cfg(test)]
pub use image_model_port::MockImageModelPort;
pub use image_model_port::ImageModelPort;
#[cfg(test)]
pub use tabular_model_port::MockTabularModelPort;
pub use tabular_model_port::{ModelLabel, TabularModelPort};
