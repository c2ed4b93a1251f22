//! Term-planning domain models.
//!
//! Provides the data types flowing through a planning run: raw input
//! rows, screened courses, terms, and the final plan.
//!
//! # Data Flow
//!
//! | Stage | Type |
//! |-------|------|
//! | Data store row | `CourseRecord` |
//! | Screened input | `Course` (with `Prerequisite`) |
//! | Scheduling period | `Term` (with `TermLabel`) |
//! | Output | `PlanResult`, `UnplacedCourse`, `PlanWarning` |

mod course;
mod plan;
mod term;

pub use course::{Course, CourseKind, CourseNumber, CourseRecord, Credits, Prerequisite};
pub use plan::{PlanResult, PlanWarning, UnplacedCourse, UnplacedReason};
pub use term::{ClassYear, Season, Term, TermLabel};

use std::collections::HashMap;

/// Credit lookup by course title.
pub fn credit_hours(courses: &[Course]) -> HashMap<String, u32> {
    courses
        .iter()
        .map(|c| (c.title.clone(), c.credits))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_hours() {
        let courses = vec![Course::new("A", "A1", 3), Course::new("B", "B1", 4)];
        let hours = credit_hours(&courses);
        assert_eq!(hours.len(), 2);
        assert_eq!(hours["A"], 3);
        assert_eq!(hours["B"], 4);
    }
}
