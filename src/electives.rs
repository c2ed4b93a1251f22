//! Random elective selection.
//!
//! An [`ElectiveMenu`] holds a pool of optional courses and a number of
//! slots to fill. Picking draws distinct options uniformly without
//! replacement; the caller supplies the RNG, so seeded runs reproduce.

use rand::prelude::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Course, CourseKind};

/// Optional courses and how many of them to take.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectiveMenu {
    /// Number of electives to add to a plan.
    pub slots: usize,
    /// Candidate courses.
    pub options: Vec<Course>,
}

impl ElectiveMenu {
    /// Creates an empty menu with `slots` picks.
    pub fn new(slots: usize) -> Self {
        Self {
            slots,
            options: Vec::new(),
        }
    }

    /// Adds a candidate course.
    pub fn with_option(mut self, course: Course) -> Self {
        self.options.push(course);
        self
    }

    /// Draws up to `slots` distinct options.
    ///
    /// Picked courses are marked [`CourseKind::Elective`] and keep their
    /// own prerequisite. Returns fewer than `slots` when the pool is small.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Course> {
        self.pick_excluding(rng, &[])
    }

    /// Like [`pick`](Self::pick), skipping options whose title or code
    /// appears in `taken`.
    pub fn pick_excluding<R: Rng + ?Sized>(&self, rng: &mut R, taken: &[&str]) -> Vec<Course> {
        let available: Vec<&Course> = self
            .options
            .iter()
            .filter(|c| !taken.iter().any(|t| c.matches_reference(t)))
            .collect();

        available
            .choose_multiple(rng, self.slots)
            .map(|&c| c.clone().with_kind(CourseKind::Elective))
            .collect()
    }
}
