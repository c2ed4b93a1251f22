//! Prerequisite graph and priority scoring.
//!
//! # Pipeline
//!
//! 1. [`build_prerequisite_map`]: title → ancestor chain (nearest first),
//!    with a cycle guard and a record of unresolved references.
//! 2. [`calculate_priority`]: title → direct fan-in score.
//!
//! Both are pure functions of their input; calling them twice on the same
//! courses yields equal maps.

mod graph;
mod priority;

pub use graph::{build_prerequisite_map, PrerequisiteMap, UnresolvedReference};
pub use priority::{calculate_priority, PriorityMap};

pub(crate) use graph::CourseResolver;
