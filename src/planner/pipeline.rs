//! End-to-end planning pipeline.
//!
//! # Stages
//!
//! 1. Screen input rows ([`crate::validation`]).
//! 2. Build the prerequisite map; courses on a cycle are set aside and the
//!    map is rebuilt without them.
//! 3. Score fan-in priorities and attach them to the courses.
//! 4. Allocate terms ([`TermAllocator`]).
//! 5. Merge rejected, cyclic and leftover courses into one unplaced list,
//!    and attach data-quality warnings.

use rand::Rng;
use tracing::{info, warn};

use super::{PlanSummary, PlannerConfig, TermAllocator};
use crate::electives::ElectiveMenu;
use crate::error::Result;
use crate::models::{Course, CourseRecord, PlanResult, PlanWarning, UnplacedCourse, UnplacedReason};
use crate::prerequisites::{build_prerequisite_map, calculate_priority, CourseResolver};
use crate::validation::{screen_courses, screen_records, Screened};

/// Validated configuration plus the full planning pipeline.
///
/// # Example
///
/// ```
/// use u_termplan::models::CourseRecord;
/// use u_termplan::planner::{Planner, PlannerConfig};
///
/// let planner = Planner::new(PlannerConfig::default()).unwrap();
/// let plan = planner.plan(vec![
///     CourseRecord::new("Programming I", "CS101", 4u32),
///     CourseRecord::new("Programming II", "CS102", 4u32).with_prerequisite("CS101"),
///     CourseRecord::new("Senior Project", "CS499", 3u32).with_prerequisite("FINAL SEMESTER"),
/// ]);
///
/// assert_eq!(plan.term_of("Programming I"), Some(1));
/// assert_eq!(plan.term_of("Programming II"), Some(2));
/// assert_eq!(plan.term_of("Senior Project"), Some(8));
/// ```
#[derive(Debug, Clone)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    /// Creates a planner after validating `config`.
    pub fn new(config: PlannerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans raw data-store rows.
    pub fn plan(&self, records: Vec<CourseRecord>) -> PlanResult {
        self.run(screen_records(records))
    }

    /// Plans already-typed courses. Incoming priorities are recomputed.
    pub fn plan_courses(&self, courses: Vec<Course>) -> PlanResult {
        self.run(screen_courses(courses))
    }

    /// Plans raw rows plus electives drawn from `menu`.
    ///
    /// Menu options already present in the input are not drawn.
    pub fn plan_with_electives<R: Rng + ?Sized>(
        &self,
        records: Vec<CourseRecord>,
        menu: &ElectiveMenu,
        rng: &mut R,
    ) -> PlanResult {
        let Screened {
            mut courses,
            mut rejected,
        } = screen_records(records);

        let taken: Vec<&str> = courses
            .iter()
            .flat_map(|c| [c.title.as_str(), c.course_code.as_str()])
            .collect();
        let electives = menu.pick_excluding(rng, &taken);
        info!(slots = menu.slots, picked = electives.len(), "electives drawn");

        courses.extend(electives);
        let mut screened = screen_courses(courses);
        rejected.append(&mut screened.rejected);
        screened.rejected = rejected;
        self.run(screened)
    }

    /// Quality indicators for a plan produced by this planner.
    pub fn summarize(&self, plan: &PlanResult) -> PlanSummary {
        PlanSummary::calculate(plan, &self.config)
    }

    fn run(&self, screened: Screened) -> PlanResult {
        let Screened { courses, rejected } = screened;
        let initial = build_prerequisite_map(&courses);

        let (mut courses, cyclic): (Vec<Course>, Vec<Course>) = if initial.cyclic().is_empty() {
            (courses, Vec::new())
        } else {
            courses
                .into_iter()
                .partition(|c| !initial.is_cyclic(&c.title))
        };
        for course in &cyclic {
            warn!(course = %course.title, "prerequisite cycle, course excluded");
        }

        let prereq_map = if cyclic.is_empty() {
            initial
        } else {
            build_prerequisite_map(&courses)
        };

        // References into cyclic or rejected courses are explained by those
        // courses' own unplaced entries.
        let cyclic_resolver = CourseResolver::new(&cyclic);
        let set_aside = |reference: &str| -> Option<String> {
            cyclic_resolver
                .resolve(reference)
                .map(|i| cyclic[i].title.clone())
                .or_else(|| rejected_title(&rejected, reference))
        };

        let warnings: Vec<PlanWarning> = prereq_map
            .unresolved()
            .iter()
            .filter(|u| set_aside(&u.reference).is_none())
            .map(|u| PlanWarning::UnresolvedPrerequisite {
                course: u.course.clone(),
                reference: u.reference.clone(),
            })
            .collect();
        for warning in &warnings {
            warn!("{warning}");
        }

        calculate_priority(&prereq_map).apply(&mut courses);
        let allocated = TermAllocator::new(self.config.clone()).allocate(&courses);
        let PlanResult {
            terms,
            unplaced: leftover,
            ..
        } = allocated;

        let leftover: Vec<UnplacedCourse> = leftover
            .into_iter()
            .map(|mut entry| {
                if let UnplacedReason::MissingPrerequisite(reference) = &entry.reason {
                    if let Some(title) = set_aside(reference) {
                        entry.reason = UnplacedReason::PrerequisiteUnplaced(title);
                    }
                }
                entry
            })
            .collect();

        let mut unplaced: Vec<UnplacedCourse> = rejected;
        unplaced.extend(
            cyclic
                .iter()
                .map(|c| UnplacedCourse::from_course(c, UnplacedReason::CyclicPrerequisite)),
        );
        unplaced.extend(leftover);

        let plan = PlanResult::new(terms, unplaced).with_warnings(warnings);
        info!(
            courses = courses.len(),
            placed = plan.total_courses,
            credits = plan.total_credits,
            unplaced = plan.unplaced.len(),
            warnings = plan.warnings.len(),
            "plan complete"
        );
        plan
    }
}

/// Title of a rejected row matching `reference`, title first, then code.
fn rejected_title(rejected: &[UnplacedCourse], reference: &str) -> Option<String> {
    let named = |u: &&UnplacedCourse| !u.title.is_empty();
    rejected
        .iter()
        .filter(named)
        .find(|u| u.title == reference)
        .or_else(|| rejected.iter().filter(named).find(|u| u.course_code == reference))
        .map(|u| u.title.clone())
}
