//! Business logic orchestrating validation, queries and storage calls.

pub mod errors;
pub mod products;

pub use errors::{ServiceError, ServiceResult};
