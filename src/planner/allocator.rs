//! Term-by-term course allocation.
//!
//! # Algorithm
//!
//! For each term, in order:
//! 1. Courses placed in the previous term become completed.
//! 2. Snapshot the schedulable courses: no prerequisite, final-term-only in
//!    the last term, or a prerequisite that resolves to a completed course.
//!    References resolve once, title first, exactly as in
//!    [`crate::prerequisites::build_prerequisite_map`].
//! 3. Open priority tiers from highest to lowest while the term is below
//!    the target. Within a tier, keep the courses that individually fit the
//!    remaining capacity; take them all if their sum fits, otherwise take
//!    an exact best-credit subset.
//! 4. If the term is still below the floor, top it up from the leftover
//!    schedulable courses in input order.
//! 5. Apply all placements as one batch removal from the remaining set.
//!
//! A course placed in term t never satisfies a prerequisite in term t.
//!
//! # Complexity
//! O(T · n) for the snapshots plus the packing cost of overflowing tiers.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use tracing::{debug, info};

use super::PlannerConfig;
use crate::models::{Course, PlanResult, Prerequisite, Term, UnplacedCourse, UnplacedReason};
use crate::packing::subset_credits;
use crate::prerequisites::CourseResolver;

/// Greedy, priority-tiered, credit-bounded term allocator.
///
/// Courses are expected to carry their fan-in score in
/// [`Course::priority`]; see [`crate::prerequisites::calculate_priority`].
///
/// # Example
///
/// ```
/// use u_termplan::models::Course;
/// use u_termplan::planner::{PlannerConfig, TermAllocator};
///
/// let courses = vec![
///     Course::new("A", "A1", 3).with_priority(1),
///     Course::new("B", "B1", 3).requires("A").with_priority(1),
///     Course::new("C", "C1", 4).requires("B"),
/// ];
/// let config = PlannerConfig::default()
///     .with_term_count(3)
///     .with_target_credits(6)
///     .with_max_credits(6)
///     .with_min_credits(0);
///
/// let plan = TermAllocator::new(config).allocate(&courses);
/// assert_eq!(plan.term_of("A"), Some(1));
/// assert_eq!(plan.term_of("B"), Some(2));
/// assert_eq!(plan.term_of("C"), Some(3));
/// assert!(plan.unplaced.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct TermAllocator {
    config: PlannerConfig,
}

impl TermAllocator {
    /// Creates an allocator. The configuration is used as given; see
    /// [`PlannerConfig::validate`].
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Places `courses` into the configured number of terms.
    ///
    /// Never fails; courses left over after the last term are reported in
    /// [`PlanResult::unplaced`].
    pub fn allocate(&self, courses: &[Course]) -> PlanResult {
        let term_count = self.config.term_count;
        let mut terms: Vec<Term> = (1..=term_count).map(Term::new).collect();

        let resolver = CourseResolver::new(courses);
        let requirements: Vec<Requirement> = courses
            .iter()
            .map(|c| Requirement::resolve(c, &resolver))
            .collect();

        let mut remaining: Vec<usize> = (0..courses.len()).collect();
        let mut placed_in: Vec<Option<usize>> = vec![None; courses.len()];
        let mut completed: Vec<bool> = vec![false; courses.len()];
        let mut in_progress: Vec<usize> = Vec::new();

        for term in terms.iter_mut() {
            for idx in in_progress.drain(..) {
                completed[idx] = true;
            }

            let is_final = term.index == term_count;
            let schedulable: Vec<usize> = remaining
                .iter()
                .copied()
                .filter(|&i| requirements[i].is_met(&completed, is_final))
                .collect();

            if schedulable.is_empty() {
                debug!(term = term.index, "no schedulable courses");
                continue;
            }

            let picks = self.select_for_term(courses, &schedulable);
            for &i in &picks {
                term.add_course(courses[i].clone());
                placed_in[i] = Some(term.index);
            }
            remaining.retain(|i| placed_in[*i].is_none());

            debug!(
                term = term.index,
                label = %term.label,
                schedulable = schedulable.len(),
                placed = picks.len(),
                credits = term.total_credits,
                "term allocated"
            );
            in_progress = picks;
        }

        let unplaced: Vec<UnplacedCourse> = remaining
            .iter()
            .map(|&i| {
                let reason =
                    self.unplaced_reason(&courses[i], &requirements[i], courses, &placed_in);
                UnplacedCourse::from_course(&courses[i], reason)
            })
            .collect();

        let plan = PlanResult::new(terms, unplaced);
        info!(
            terms = term_count,
            courses = plan.total_courses,
            credits = plan.total_credits,
            unplaced = plan.unplaced.len(),
            "allocation finished"
        );
        plan
    }

    /// Chooses the courses for one term from a schedulable snapshot.
    ///
    /// Returns input indices in placement order. Pure: depends only on its
    /// arguments and the configuration.
    pub(crate) fn select_for_term(&self, courses: &[Course], schedulable: &[usize]) -> Vec<usize> {
        let max = self.config.max_credits;
        let mut total = 0u32;
        let mut picks: Vec<usize> = Vec::new();

        for tier in priority_tiers(courses, schedulable) {
            if total >= self.config.target_credits {
                break;
            }
            let capacity = max - total;
            let fitting: Vec<usize> = tier
                .into_iter()
                .filter(|&i| courses[i].credits <= capacity)
                .collect();
            if fitting.is_empty() {
                continue;
            }

            let credits: Vec<u32> = fitting.iter().map(|&i| courses[i].credits).collect();
            let tier_total: u64 = credits.iter().map(|&c| u64::from(c)).sum();
            let chosen: Vec<usize> = if tier_total <= u64::from(capacity) {
                fitting
            } else {
                let subset = self.config.packing.best_subset_indices(&credits, capacity);
                debug!(
                    tier_size = fitting.len(),
                    capacity,
                    packed = subset_credits(&credits, &subset),
                    "tier overflow packed"
                );
                subset.into_iter().map(|k| fitting[k]).collect()
            };

            total += chosen.iter().map(|&i| courses[i].credits).sum::<u32>();
            picks.extend(chosen);
        }

        if total < self.config.min_credits {
            for &i in schedulable {
                if total >= self.config.min_credits {
                    break;
                }
                if picks.contains(&i) {
                    continue;
                }
                // total <= max always holds here.
                let credits = courses[i].credits;
                if credits <= max - total {
                    picks.push(i);
                    total += credits;
                }
            }
        }

        picks
    }

    fn unplaced_reason(
        &self,
        course: &Course,
        requirement: &Requirement,
        courses: &[Course],
        placed_in: &[Option<usize>],
    ) -> UnplacedReason {
        if course.credits > self.config.max_credits {
            return UnplacedReason::ExceedsMaxCredits;
        }
        match *requirement {
            Requirement::None => UnplacedReason::OutOfTerms,
            Requirement::FinalTerm => UnplacedReason::FinalTermFull,
            Requirement::Missing => {
                let reference = course.prerequisite.reference().unwrap_or_default();
                UnplacedReason::MissingPrerequisite(reference.to_string())
            }
            Requirement::Course(target) => {
                // Satisfied only if it finished before the last term.
                let satisfied = placed_in[target].is_some_and(|t| t < self.config.term_count);
                if satisfied {
                    UnplacedReason::OutOfTerms
                } else {
                    UnplacedReason::PrerequisiteUnplaced(courses[target].title.clone())
                }
            }
        }
    }
}

/// Places `courses` with the given configuration.
pub fn allocate(courses: &[Course], config: &PlannerConfig) -> PlanResult {
    TermAllocator::new(config.clone()).allocate(courses)
}

/// A course's prerequisite, resolved once to an input index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Requirement {
    None,
    FinalTerm,
    /// Reference resolves to no course.
    Missing,
    Course(usize),
}

impl Requirement {
    fn resolve(course: &Course, resolver: &CourseResolver<'_>) -> Self {
        match &course.prerequisite {
            Prerequisite::None => Self::None,
            Prerequisite::FinalTermOnly => Self::FinalTerm,
            Prerequisite::CourseRef(reference) => resolver
                .resolve(reference)
                .map_or(Self::Missing, Self::Course),
        }
    }

    fn is_met(&self, completed: &[bool], is_final: bool) -> bool {
        match *self {
            Self::None => true,
            Self::FinalTerm => is_final,
            Self::Missing => false,
            Self::Course(target) => completed[target],
        }
    }
}

/// Groups indices by priority, highest first; input order within a tier.
fn priority_tiers(courses: &[Course], indices: &[usize]) -> Vec<Vec<usize>> {
    let mut tiers: BTreeMap<Reverse<u32>, Vec<usize>> = BTreeMap::new();
    for &i in indices {
        tiers.entry(Reverse(courses[i].priority)).or_default().push(i);
    }
    tiers.into_values().collect()
}
