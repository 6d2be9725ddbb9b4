//! Read-only HTTP surface for the analytics engine.
//!
//! Every endpoint serves a tabular result set computed from the immutable
//! startup snapshot. There are no writes, no auth, and no tenancy: the
//! consumer is a trusted BI/dashboard layer.

pub mod response;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
