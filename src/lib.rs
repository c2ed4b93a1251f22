//! Academic term planning.
//!
//! Turns a flat course catalog (each course naming at most one
//! prerequisite) into a multi-term plan that respects prerequisite order
//! and per-term credit bounds.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Course`, `Prerequisite`, `CourseRecord`,
//!   `Term`, `TermLabel`, `PlanResult`, `UnplacedCourse`
//! - **`prerequisites`**: Prerequisite chain map and fan-in priority scoring
//! - **`packing`**: Exact subset-sum packing of a tier into a credit budget
//! - **`planner`**: Term allocator, end-to-end pipeline, plan KPIs
//! - **`validation`**: Input screening and catalog integrity checks
//! - **`electives`**: Seeded random elective selection
//!
//! # Quick Start
//!
//! ```
//! use u_termplan::models::Course;
//! use u_termplan::planner::{Planner, PlannerConfig};
//!
//! let planner = Planner::new(
//!     PlannerConfig::default()
//!         .with_term_count(3)
//!         .with_target_credits(6)
//!         .with_max_credits(6)
//!         .with_min_credits(0),
//! )
//! .unwrap();
//!
//! let plan = planner.plan_courses(vec![
//!     Course::new("A", "A1", 3),
//!     Course::new("B", "B1", 3).requires("A"),
//!     Course::new("C", "C1", 4).requires("B"),
//! ]);
//!
//! assert_eq!(plan.term(1).unwrap().total_credits, 3);
//! assert_eq!(plan.term(2).unwrap().total_credits, 3);
//! assert_eq!(plan.term(3).unwrap().total_credits, 4);
//! assert!(plan.unplaced.is_empty());
//! ```
//!
//! # Logging
//!
//! Emits `tracing` events; install a subscriber to see them.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Kellerer, Pferschy & Pisinger (2004), "Knapsack Problems"
//! - Cormen et al. (2009), "Introduction to Algorithms"

pub mod electives;
pub mod error;
pub mod models;
pub mod packing;
pub mod planner;
pub mod prerequisites;
pub mod validation;

pub use error::{PlanError, Result};
