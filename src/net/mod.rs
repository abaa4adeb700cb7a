//! Network layer: wire types and REST helpers for the account backend.

pub mod api;
pub mod types;
