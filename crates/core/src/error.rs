//! Unified error types for the analytics engine.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the analytics engine.
#[derive(Debug, Error)]
pub enum Error {
    /// The dataset snapshot could not be read or parsed.
    #[error("snapshot error: {0}")]
    Snapshot(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown campaign: {0}")]
    UnknownCampaign(u32),

    #[error("unknown influencer: {0}")]
    UnknownInfluencer(u32),

    #[error("unknown brand: {0}")]
    UnknownBrand(u32),

    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn snapshot(msg: impl Into<String>) -> Self {
        Self::Snapshot(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Snapshot(_) => 500,
            Self::Validation(_) => 400,
            Self::Serialization(_) => 400,
            Self::Io(_) => 500,
            Self::UnknownCampaign(_) => 404,
            Self::UnknownInfluencer(_) => 404,
            Self::UnknownBrand(_) => 404,
            Self::Internal(_) => 500,
        }
    }
}
