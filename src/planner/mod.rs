//! Term planning.
//!
//! Places prerequisite-ordered courses into a fixed number of terms under
//! per-term credit bounds.
//!
//! # Components
//!
//! - [`PlannerConfig`]: term count, target / max / floor credits, packing
//! - [`TermAllocator`]: the per-term greedy loop with exact tier packing
//! - [`Planner`]: screening, cycle exclusion, scoring, then allocation
//! - [`PlanSummary`]: load-balance indicators for a finished plan
//!
//! # Reference
//! - Pinedo (2016), "Scheduling", Ch. 4 (Single Machine, Precedence Constraints)
//! - Kellerer, Pferschy & Pisinger (2004), "Knapsack Problems"

mod allocator;
mod config;
mod pipeline;
mod summary;

pub use allocator::{allocate, TermAllocator};
pub use config::PlannerConfig;
pub use pipeline::Planner;
pub use summary::PlanSummary;
