//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth` for the session, `form` for the
//! transient draft) so pages depend on small focused models. The pieces
//! are plain types; pages wrap them in `RwSignal`s.

pub mod auth;
pub mod form;
