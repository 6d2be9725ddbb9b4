//! Telemetry: structured logging and component health.

pub mod health;
pub mod tracing_setup;

pub use health::{health, ComponentHealth, EngineHealth, HealthReport, HealthStatus};
pub use tracing_setup::{init_tracing, init_tracing_from_env, TracingConfig};
