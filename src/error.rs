//! Error types.
//!
//! The planning algorithms themselves never fail: input anomalies degrade
//! to unplaced courses and warnings. Only planner configuration can be
//! rejected.

use thiserror::Error;

/// Planner error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// A configuration value is out of range.
    #[error("Invalid planner configuration for '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

impl PlanError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

/// Planner result type.
pub type Result<T> = std::result::Result<T, PlanError>;
