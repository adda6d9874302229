//! Domain layer for AgriAI
//!
//! Contains the static lookup tables, categorical value objects, feature
//! vectors and recommendation entities. No model runtime or I/O lives here.

pub mod catalog;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
