//! Reusable UI components.

pub mod draft_input;
