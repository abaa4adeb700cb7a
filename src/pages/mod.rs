//! Routed pages.

pub mod account;
pub mod admin;
pub mod dashboard;
pub mod user;
