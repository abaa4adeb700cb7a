//! Browser utility helpers.

pub mod notify;
pub mod storage;
