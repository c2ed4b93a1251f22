//! Term (semester) model.
//!
//! A term is one scheduling period with an ordered list of placed courses
//! and a running credit total. The total is maintained by [`Term::add_course`],
//! so `total_credits == sum(course.credits)` holds at all times.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Course;

/// One scheduling period in a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    /// 1-based position in the plan.
    #[serde(rename = "number")]
    pub index: usize,
    /// Class year and season (presentational).
    #[serde(flatten)]
    pub label: TermLabel,
    /// Placed courses, in placement order.
    pub courses: Vec<Course>,
    /// Sum of placed course credits.
    pub total_credits: u32,
}

impl Term {
    /// Creates an empty term at the given 1-based index.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            label: TermLabel::for_index(index),
            courses: Vec::new(),
            total_credits: 0,
        }
    }

    /// Appends a course and accumulates its credits, saturating at
    /// `u32::MAX`.
    pub fn add_course(&mut self, course: Course) {
        self.total_credits = self.total_credits.saturating_add(course.credits);
        self.courses.push(course);
    }

    /// Credits still available under `max_credits`.
    #[inline]
    pub fn remaining_capacity(&self, max_credits: u32) -> u32 {
        max_credits.saturating_sub(self.total_credits)
    }

    /// Whether a course with the given title was placed here.
    pub fn contains(&self, title: &str) -> bool {
        self.courses.iter().any(|c| c.title == title)
    }

    /// Number of placed courses.
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Whether no course was placed.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

/// Class year and season of a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermLabel {
    pub year: ClassYear,
    pub season: Season,
}

impl TermLabel {
    /// Label for a 1-based term index: two terms per year, Fall first.
    pub fn for_index(index: usize) -> Self {
        let year_number = (index.max(1) - 1) / 2 + 1;
        let year = match year_number {
            1 => ClassYear::Freshman,
            2 => ClassYear::Sophomore,
            3 => ClassYear::Junior,
            4 => ClassYear::Senior,
            n => ClassYear::Extended(n as u32),
        };
        let season = if index % 2 == 1 {
            Season::Fall
        } else {
            Season::Spring
        };
        Self { year, season }
    }
}

impl fmt::Display for TermLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.year, self.season)
    }
}

/// Academic class year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassYear {
    Freshman,
    Sophomore,
    Junior,
    Senior,
    /// Fifth year and beyond.
    Extended(u32),
}

impl fmt::Display for ClassYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Freshman => write!(f, "Freshman"),
            Self::Sophomore => write!(f, "Sophomore"),
            Self::Junior => write!(f, "Junior"),
            Self::Senior => write!(f, "Senior"),
            Self::Extended(n) => write!(f, "Year {n}"),
        }
    }
}

/// Half of an academic year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Fall,
    Spring,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fall => write!(f, "Fall"),
            Self::Spring => write!(f, "Spring"),
        }
    }
}
