//! Application state shared across handlers.

use std::sync::Arc;

use analytics_core::Dataset;
use quality::DataQualityReport;

/// Shared application state: the immutable snapshot plus the standing
/// data-quality report computed once at startup.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub quality: Arc<DataQualityReport>,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let quality = Arc::new(DataQualityReport::run(&dataset));
        Self { dataset, quality }
    }
}
