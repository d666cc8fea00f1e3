//! Diesel row types and server configuration.

#[cfg(feature = "server")]
pub mod config;
pub mod product;
