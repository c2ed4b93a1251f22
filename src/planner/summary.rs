//! Plan quality metrics.
//!
//! Computes load-balance indicators from a finished plan and the
//! configuration it was produced with.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion Rate | placed / (placed + unplaced) |
//! | Avg Term Credits | Mean credits over non-empty terms |
//! | Terms Below Floor | Non-empty terms under `min_credits` |
//! | Terms Reaching Target | Terms with credits ≥ `target_credits` |
//! | Max Target Deviation | Largest \|credits − target\| over non-empty terms |

use serde::{Deserialize, Serialize};

use super::PlannerConfig;
use crate::models::PlanResult;

/// Plan performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    /// Sum of placed credits.
    pub total_credits: u32,
    /// Number of placed courses.
    pub placed_courses: usize,
    /// Number of unplaced courses.
    pub unplaced_courses: usize,
    /// Fraction of courses placed (0.0..=1.0).
    pub completion_rate: f64,
    /// Mean credits over terms holding at least one course.
    pub avg_term_credits: f64,
    /// Non-empty terms whose load is under the floor.
    pub terms_below_floor: usize,
    /// Terms whose load reached the target.
    pub terms_reaching_target: usize,
    /// Terms with no courses.
    pub empty_terms: usize,
    /// Largest distance from the target among non-empty terms.
    pub max_target_deviation: u32,
}

impl PlanSummary {
    /// Computes indicators for `plan` under `config`.
    pub fn calculate(plan: &PlanResult, config: &PlannerConfig) -> Self {
        let placed = plan.total_courses;
        let unplaced = plan.unplaced.len();

        let mut loaded_terms = 0usize;
        let mut loaded_credits = 0u32;
        let mut below_floor = 0usize;
        let mut reaching_target = 0usize;
        let mut max_deviation = 0u32;

        for term in &plan.terms {
            if term.total_credits >= config.target_credits {
                reaching_target += 1;
            }
            if term.is_empty() {
                continue;
            }
            loaded_terms += 1;
            loaded_credits += term.total_credits;
            if term.total_credits < config.min_credits {
                below_floor += 1;
            }
            max_deviation = max_deviation.max(term.total_credits.abs_diff(config.target_credits));
        }

        let completion_rate = if placed + unplaced == 0 {
            1.0
        } else {
            placed as f64 / (placed + unplaced) as f64
        };

        let avg_term_credits = if loaded_terms == 0 {
            0.0
        } else {
            f64::from(loaded_credits) / loaded_terms as f64
        };

        Self {
            total_credits: plan.total_credits,
            placed_courses: placed,
            unplaced_courses: unplaced,
            completion_rate,
            avg_term_credits,
            terms_below_floor: below_floor,
            terms_reaching_target: reaching_target,
            empty_terms: plan.terms.len() - loaded_terms,
            max_target_deviation: max_deviation,
        }
    }

    /// Whether the plan meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_unplaced: usize, min_completion: f64) -> bool {
        self.unplaced_courses <= max_unplaced && self.completion_rate >= min_completion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Term, UnplacedCourse, UnplacedReason};

    fn term(index: usize, credits: &[u32]) -> Term {
        let mut t = Term::new(index);
        for (i, &c) in credits.iter().enumerate() {
            t.add_course(Course::new(format!("T{index}C{i}"), format!("X{index}{i}"), c));
        }
        t
    }

    #[test]
    fn test_summary_basic() {
        let plan = PlanResult::new(
            vec![term(1, &[6, 6, 3]), term(2, &[3, 3]), term(3, &[])],
            vec![UnplacedCourse::from_course(
                &Course::new("Late", "L1", 3),
                UnplacedReason::OutOfTerms,
            )],
        );
        let config = PlannerConfig::default();
        let summary = PlanSummary::calculate(&plan, &config);

        assert_eq!(summary.total_credits, 21);
        assert_eq!(summary.placed_courses, 5);
        assert_eq!(summary.unplaced_courses, 1);
        assert!((summary.completion_rate - 5.0 / 6.0).abs() < 1e-10);
        assert!((summary.avg_term_credits - 10.5).abs() < 1e-10);
        assert_eq!(summary.terms_below_floor, 1);
        assert_eq!(summary.terms_reaching_target, 1);
        assert_eq!(summary.empty_terms, 1);
        assert_eq!(summary.max_target_deviation, 9);
    }

    #[test]
    fn test_summary_empty_plan() {
        let plan = PlanResult::new(vec![term(1, &[])], Vec::new());
        let summary = PlanSummary::calculate(&plan, &PlannerConfig::default());
        assert!((summary.completion_rate - 1.0).abs() < 1e-10);
        assert_eq!(summary.avg_term_credits, 0.0);
        assert_eq!(summary.empty_terms, 1);
        assert_eq!(summary.max_target_deviation, 0);
    }

    #[test]
    fn test_meets_thresholds() {
        let plan = PlanResult::new(
            vec![term(1, &[3])],
            vec![UnplacedCourse::from_course(
                &Course::new("Late", "L1", 3),
                UnplacedReason::OutOfTerms,
            )],
        );
        let summary = PlanSummary::calculate(&plan, &PlannerConfig::default());
        assert!(summary.meets_thresholds(1, 0.5));
        assert!(!summary.meets_thresholds(0, 0.5));
        assert!(!summary.meets_thresholds(1, 0.9));
    }
}
