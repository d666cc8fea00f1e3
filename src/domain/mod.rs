//! Domain entities and value objects.

pub mod product;
pub mod types;
