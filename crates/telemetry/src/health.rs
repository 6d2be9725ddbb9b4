//! Component health aggregation.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

/// Health status for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }
}

/// Health state for one component.
#[derive(Debug)]
pub struct ComponentHealth {
    name: &'static str,
    healthy: AtomicBool,
    message: parking_lot::RwLock<Option<String>>,
}

impl ComponentHealth {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            healthy: AtomicBool::new(false),
            message: parking_lot::RwLock::new(None),
        }
    }

    pub fn set_healthy(&self) {
        self.healthy.store(true, Ordering::Relaxed);
        *self.message.write() = None;
    }

    pub fn set_unhealthy(&self, msg: impl Into<String>) {
        self.healthy.store(false, Ordering::Relaxed);
        *self.message.write() = Some(msg.into());
    }

    pub fn is_healthy(&self) -> bool {
        self.healthy.load(Ordering::Relaxed)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn message(&self) -> Option<String> {
        self.message.read().clone()
    }
}

/// Aggregated health report.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub components: Vec<ComponentHealthReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealthReport {
    pub name: &'static str,
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Engine-wide health: the dataset snapshot is the only dependency.
#[derive(Debug)]
pub struct EngineHealth {
    pub dataset: ComponentHealth,
}

impl EngineHealth {
    const fn new() -> Self {
        Self {
            dataset: ComponentHealth::new("dataset"),
        }
    }

    /// Ready to serve analytics: the snapshot must have loaded.
    pub fn is_ready(&self) -> bool {
        self.dataset.is_healthy()
    }

    /// The process is running.
    pub fn is_alive(&self) -> bool {
        true
    }

    pub fn report(&self) -> HealthReport {
        let components = vec![ComponentHealthReport {
            name: self.dataset.name(),
            healthy: self.dataset.is_healthy(),
            message: self.dataset.message(),
        }];
        let status = if self.is_ready() {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        };
        HealthReport { status, components }
    }
}

static HEALTH: EngineHealth = EngineHealth::new();

/// Global engine health.
pub fn health() -> &'static EngineHealth {
    &HEALTH
}
