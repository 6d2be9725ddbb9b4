//! Data-quality checks for the analytics engine.
//!
//! Every check is a pure read over the dataset producing a result set.
//! Nothing here mutates data, raises a hard error, or blocks downstream
//! layers: defects are surfaced for a human to act on, and the pipeline
//! degrades gracefully around them.

pub mod consistency;
pub mod duplicates;
pub mod nulls;
pub mod orphans;

use analytics_core::Dataset;
use serde::Serialize;
use tracing::{info, warn};

pub use consistency::{consistency_violations, ConsistencyViolation};
pub use duplicates::{duplicate_keys, DuplicateKeyReport};
pub use nulls::{null_critical_counts, NullCriticalRow};
pub use orphans::{orphan_references, OrphanReport};

/// The standing data-quality report produced before KPI generation.
#[derive(Debug, Clone, Serialize)]
pub struct DataQualityReport {
    pub orphans: OrphanReport,
    pub nulls: Vec<NullCriticalRow>,
    pub duplicates: DuplicateKeyReport,
    pub consistency: Vec<ConsistencyViolation>,
}

impl DataQualityReport {
    /// Run all checks against a snapshot.
    pub fn run(dataset: &Dataset) -> Self {
        let report = Self {
            orphans: orphan_references(dataset),
            nulls: null_critical_counts(dataset),
            duplicates: duplicate_keys(dataset),
            consistency: consistency_violations(dataset),
        };

        let warnings = report.warning_count();
        if warnings > 0 {
            warn!(warnings, "Data-quality checks found defects");
        } else {
            info!("Data-quality checks passed");
        }
        report
    }

    /// Total number of defects across all checks.
    pub fn warning_count(&self) -> usize {
        self.orphans.total()
            + self
                .nulls
                .iter()
                .map(|row| row.critical_null_rows as usize)
                .sum::<usize>()
            + self.duplicates.total()
            + self.consistency.len()
    }

    /// True when every check came back clean.
    pub fn is_clean(&self) -> bool {
        self.warning_count() == 0
    }
}
