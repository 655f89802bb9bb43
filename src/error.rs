//! Configuration errors
//!
//! The simulation itself cannot fail; only building or reconfiguring a world can.

use thiserror::Error;

/// Rejected world or tuning configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Surface dimensions must be finite and strictly positive
    #[error("invalid viewport {width}x{height}: dimensions must be finite and positive")]
    InvalidViewport { width: f32, height: f32 },

    /// A tuning value is out of range
    #[error("invalid tuning `{field}`: {reason}")]
    InvalidTuning {
        field: &'static str,
        reason: &'static str,
    },

    /// Tuning JSON could not be parsed
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    pub(crate) fn tuning(field: &'static str, reason: &'static str) -> Self {
        Self::InvalidTuning { field, reason }
    }
}
