//! Core types, dataset snapshot, and validation for the analytics engine.

pub mod dataset;
pub mod error;
pub mod model;
pub mod ratio;

pub use dataset::{Dataset, DatasetSnapshot, LoadOutcome};
pub use error::{Error, Result};
pub use model::*;
pub use ratio::{mean_defined, safe_div, safe_pct};
