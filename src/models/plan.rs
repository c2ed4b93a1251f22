//! Plan (solution) model.
//!
//! A plan is an ordered list of terms plus aggregate totals, the courses
//! that could not be placed, and non-fatal data-quality warnings.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Course, Term};

/// Output of one planning run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResult {
    /// Terms in plan order.
    pub terms: Vec<Term>,
    /// Sum of all term credits.
    pub total_credits: u32,
    /// Number of placed courses.
    pub total_courses: usize,
    /// Courses never assigned to a term.
    pub unplaced: Vec<UnplacedCourse>,
    /// Data-quality findings that did not stop planning.
    pub warnings: Vec<PlanWarning>,
}

/// A course that ended up in no term, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnplacedCourse {
    pub title: String,
    pub course_code: String,
    /// `None` when the input credits could not be read.
    pub credits: Option<u32>,
    pub reason: UnplacedReason,
}

/// Why a course was not placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail", rename_all = "snake_case")]
pub enum UnplacedReason {
    /// Rejected while screening input rows.
    InvalidRecord(String),
    /// Sits on a prerequisite cycle.
    CyclicPrerequisite,
    /// Credits exceed the per-term maximum.
    ExceedsMaxCredits,
    /// Prerequisite reference matches no course in the input.
    MissingPrerequisite(String),
    /// Prerequisite course was never placed early enough.
    PrerequisiteUnplaced(String),
    /// Final-term-only course did not fit in the last term.
    FinalTermFull,
    /// Ran out of term capacity.
    OutOfTerms,
}

/// Non-fatal finding surfaced alongside the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlanWarning {
    /// A prerequisite reference that matches no known course.
    UnresolvedPrerequisite { course: String, reference: String },
}

impl fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedPrerequisite { course, reference } => write!(
                f,
                "course '{course}' references unknown prerequisite '{reference}'"
            ),
        }
    }
}

impl UnplacedCourse {
    /// Unplaced entry for a screened course.
    pub fn from_course(course: &Course, reason: UnplacedReason) -> Self {
        Self {
            title: course.title.clone(),
            course_code: course.course_code.clone(),
            credits: Some(course.credits),
            reason,
        }
    }
}

impl PlanResult {
    /// Builds a result and computes the aggregate totals from `terms`.
    pub fn new(terms: Vec<Term>, unplaced: Vec<UnplacedCourse>) -> Self {
        let total_credits = terms.iter().map(|t| t.total_credits).sum();
        let total_courses = terms.iter().map(|t| t.course_count()).sum();
        Self {
            terms,
            total_credits,
            total_courses,
            unplaced,
            warnings: Vec::new(),
        }
    }

    /// Attaches warnings.
    pub fn with_warnings(mut self, warnings: Vec<PlanWarning>) -> Self {
        self.warnings = warnings;
        self
    }

    /// Whether every course was placed.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// 1-based index of the term holding `title`.
    pub fn term_of(&self, title: &str) -> Option<usize> {
        self.terms.iter().find(|t| t.contains(title)).map(|t| t.index)
    }

    /// Term by 1-based index.
    pub fn term(&self, index: usize) -> Option<&Term> {
        index.checked_sub(1).and_then(|i| self.terms.get(i))
    }

    /// All placed courses in plan order.
    pub fn placed_courses(&self) -> impl Iterator<Item = &Course> {
        self.terms.iter().flat_map(|t| t.courses.iter())
    }

    /// Unplaced entry for `title`.
    pub fn unplaced_course(&self, title: &str) -> Option<&UnplacedCourse> {
        self.unplaced.iter().find(|u| u.title == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> PlanResult {
        let mut t1 = Term::new(1);
        t1.add_course(Course::new("A", "A1", 3));
        t1.add_course(Course::new("B", "B1", 4));
        let mut t2 = Term::new(2);
        t2.add_course(Course::new("C", "C1", 5));
        let unplaced = vec![UnplacedCourse::from_course(
            &Course::new("D", "D1", 20),
            UnplacedReason::ExceedsMaxCredits,
        )];
        PlanResult::new(vec![t1, t2], unplaced)
    }

    #[test]
    fn test_totals() {
        let plan = sample_plan();
        assert_eq!(plan.total_credits, 12);
        assert_eq!(plan.total_courses, 3);
        assert!(!plan.is_complete());
    }

    #[test]
    fn test_lookup() {
        let plan = sample_plan();
        assert_eq!(plan.term_of("C"), Some(2));
        assert_eq!(plan.term_of("D"), None);
        assert_eq!(plan.term(1).map(|t| t.course_count()), Some(2));
        assert!(plan.term(0).is_none());
        assert!(plan.term(3).is_none());
        assert_eq!(
            plan.unplaced_course("D").map(|u| &u.reason),
            Some(&UnplacedReason::ExceedsMaxCredits)
        );
        let titles: Vec<&str> = plan.placed_courses().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_wire_shape() {
        let plan = sample_plan().with_warnings(vec![PlanWarning::UnresolvedPrerequisite {
            course: "C".into(),
            reference: "X999".into(),
        }]);
        let value = serde_json::to_value(&plan).unwrap();

        assert_eq!(value["totalCredits"], 12);
        assert_eq!(value["totalCourses"], 3);
        assert_eq!(value["terms"][0]["season"], "Fall");
        assert_eq!(value["unplaced"][0]["reason"]["type"], "exceeds_max_credits");
        assert_eq!(value["warnings"][0]["type"], "unresolved_prerequisite");
        assert_eq!(value["warnings"][0]["reference"], "X999");
    }

    #[test]
    fn test_warning_display() {
        let w = PlanWarning::UnresolvedPrerequisite {
            course: "Compilers".into(),
            reference: "CSCI999".into(),
        };
        assert_eq!(
            w.to_string(),
            "course 'Compilers' references unknown prerequisite 'CSCI999'"
        );
    }
}
