//! Wire representations returned by the HTTP surface.

pub mod products;
