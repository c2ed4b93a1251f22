//! Planner configuration.
//!
//! [`PlannerConfig`] holds the term count and the three credit bounds that
//! shape each term, plus the packing strategy used for tier overflow.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::packing::PackingStrategy;

/// Configuration for term allocation.
///
/// # Defaults
///
/// ```
/// use u_termplan::planner::PlannerConfig;
///
/// let config = PlannerConfig::default();
/// assert_eq!(config.term_count, 8);
/// assert_eq!(config.target_credits, 15);
/// assert_eq!(config.max_credits, 18);
/// assert_eq!(config.min_credits, 12);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_termplan::planner::PlannerConfig;
///
/// let config = PlannerConfig::default()
///     .with_term_count(10)
///     .with_target_credits(12)
///     .with_max_credits(16);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Number of terms in the plan.
    pub term_count: usize,

    /// Credit load at which a term counts as full.
    ///
    /// Priority tiers are opened while the term total is below this value.
    pub target_credits: u32,

    /// Hard per-term credit cap.
    pub max_credits: u32,

    /// Floor below which a term is topped up from any schedulable course,
    /// ignoring priority tiers.
    pub min_credits: u32,

    /// Exact algorithm used when a tier overflows the remaining capacity.
    pub packing: PackingStrategy,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            term_count: 8,
            target_credits: 15,
            max_credits: 18,
            min_credits: 12,
            packing: PackingStrategy::default(),
        }
    }
}

impl PlannerConfig {
    /// Sets the number of terms.
    pub fn with_term_count(mut self, n: usize) -> Self {
        self.term_count = n;
        self
    }

    /// Sets the target credit load.
    pub fn with_target_credits(mut self, credits: u32) -> Self {
        self.target_credits = credits;
        self
    }

    /// Sets the per-term credit cap.
    pub fn with_max_credits(mut self, credits: u32) -> Self {
        self.max_credits = credits;
        self
    }

    /// Sets the minimum floor.
    pub fn with_min_credits(mut self, credits: u32) -> Self {
        self.min_credits = credits;
        self
    }

    /// Sets the packing strategy.
    pub fn with_packing(mut self, packing: PackingStrategy) -> Self {
        self.packing = packing;
        self
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.term_count == 0 {
            return Err(PlanError::invalid("term_count", "must be at least 1"));
        }
        if self.max_credits == 0 {
            return Err(PlanError::invalid("max_credits", "must be at least 1"));
        }
        if self.target_credits == 0 {
            return Err(PlanError::invalid("target_credits", "must be at least 1"));
        }
        if self.target_credits > self.max_credits {
            return Err(PlanError::invalid(
                "target_credits",
                format!(
                    "{} exceeds max_credits {}",
                    self.target_credits, self.max_credits
                ),
            ));
        }
        if self.min_credits > self.max_credits {
            return Err(PlanError::invalid(
                "min_credits",
                format!(
                    "{} exceeds max_credits {}",
                    self.min_credits, self.max_credits
                ),
            ));
        }
        Ok(())
    }
}
