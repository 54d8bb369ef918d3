//! Network layer: wire types, error taxonomy, and REST calls.

pub mod api;
pub mod error;
pub mod types;
