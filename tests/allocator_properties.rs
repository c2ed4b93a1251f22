//! Property tests for plan invariants on random acyclic catalogs.

use proptest::prelude::*;
use u_termplan::models::{Course, Prerequisite};
use u_termplan::planner::{Planner, PlannerConfig};
use u_termplan::prerequisites::build_prerequisite_map;

type CatalogSpec = Vec<(u32, Option<usize>, bool)>;

/// Code of course `i`. Every third code equals the next course's title,
/// so title and code lookups disagree for those strings.
fn code(i: usize) -> String {
    if i % 3 == 0 {
        format!("T{}", i + 1)
    } else {
        format!("K{i}")
    }
}

/// Catalog where course `i` may require an earlier course `j`, by title or
/// by code. Code references are only used where they resolve back to `j`.
fn catalog(spec: &[(u32, Option<usize>, bool)]) -> Vec<Course> {
    spec.iter()
        .enumerate()
        .map(|(i, &(credits, prereq, by_title))| {
            let course = Course::new(format!("T{i}"), code(i), credits);
            match prereq {
                Some(offset) if i > 0 => {
                    let j = offset % i;
                    if by_title || j % 3 == 0 {
                        course.requires(format!("T{j}"))
                    } else {
                        course.requires(code(j))
                    }
                }
                _ => course,
            }
        })
        .collect()
}

fn config_strategy() -> impl Strategy<Value = PlannerConfig> {
    (1usize..=8, 4u32..=20).prop_flat_map(|(terms, max)| {
        (1u32..=max, 0u32..=max).prop_map(move |(target, floor)| {
            PlannerConfig::default()
                .with_term_count(terms)
                .with_max_credits(max)
                .with_target_credits(target)
                .with_min_credits(floor)
        })
    })
}

fn catalog_strategy() -> impl Strategy<Value = CatalogSpec> {
    prop::collection::vec(
        (1u32..=8, prop::option::of(0usize..64), any::<bool>()),
        0..24,
    )
}

proptest! {
    #[test]
    fn prop_credit_cap_and_totals(spec in catalog_strategy(), config in config_strategy()) {
        let max = config.max_credits;
        let planner = Planner::new(config).unwrap();
        let plan = planner.plan_courses(catalog(&spec));

        for term in &plan.terms {
            let placed: u32 = term.courses.iter().map(|c| c.credits).sum();
            prop_assert!(term.total_credits <= max);
            prop_assert_eq!(term.total_credits, placed);
        }
        let term_sum: u32 = plan.terms.iter().map(|t| t.total_credits).sum();
        prop_assert_eq!(plan.total_credits, term_sum);
        prop_assert_eq!(plan.total_courses + plan.unplaced.len(), spec.len());
    }

    #[test]
    fn prop_prerequisite_taken_in_earlier_term(
        spec in catalog_strategy(),
        config in config_strategy(),
    ) {
        let term_count = config.term_count;
        let courses = catalog(&spec);
        let prereq_map = build_prerequisite_map(&courses);
        let planner = Planner::new(config).unwrap();
        let plan = planner.plan_courses(courses);

        for term in &plan.terms {
            for course in &term.courses {
                match &course.prerequisite {
                    Prerequisite::CourseRef(_) => {
                        let required = prereq_map.direct_prerequisite(&course.title);
                        let before = required.and_then(|title| plan.term_of(title));
                        prop_assert!(before.is_some_and(|t| t < term.index));
                    }
                    Prerequisite::FinalTermOnly => prop_assert_eq!(term.index, term_count),
                    Prerequisite::None => {}
                }
            }
        }
    }

    #[test]
    fn prop_planning_is_deterministic(spec in catalog_strategy(), config in config_strategy()) {
        let planner = Planner::new(config).unwrap();
        let first = planner.plan_courses(catalog(&spec));
        let second = planner.plan_courses(catalog(&spec));
        prop_assert_eq!(first, second);
    }
}
