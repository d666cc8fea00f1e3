//! Validation of raw request payloads into domain types.

pub mod products;
