//! Course model.
//!
//! A course is the unit of work placed into a term. It carries a credit
//! load, at most one prerequisite reference, and a computed priority
//! (fan-in) used to order competing courses.
//!
//! Raw rows from a data store arrive as [`CourseRecord`]s; they are
//! screened into [`Course`]s by [`crate::validation::screen_records`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A course required by a plan.
///
/// `title` is unique within one planning run and is the key used by the
/// prerequisite and priority maps. `course_code` is a short identifier
/// (department + number) that prerequisites may reference instead of the
/// title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Display name, unique within a planning run.
    pub title: String,
    /// Short identifier (e.g., "CSCI101").
    pub course_code: String,
    /// Term-load cost (positive).
    pub credits: u32,
    /// Single prerequisite condition.
    pub prerequisite: Prerequisite,
    /// Fan-in score (higher = scheduled earlier). Computed, not input.
    pub priority: u32,
    /// Display category.
    pub kind: CourseKind,
    /// Instructor name (pass-through).
    pub instructor: Option<String>,
    /// Meeting time (pass-through).
    pub meeting_time: Option<String>,
}

impl Course {
    /// Creates a course with no prerequisite.
    pub fn new(title: impl Into<String>, course_code: impl Into<String>, credits: u32) -> Self {
        Self {
            title: title.into(),
            course_code: course_code.into(),
            credits,
            prerequisite: Prerequisite::None,
            priority: 0,
            kind: CourseKind::default(),
            instructor: None,
            meeting_time: None,
        }
    }

    /// Sets the prerequisite condition.
    pub fn with_prerequisite(mut self, prerequisite: Prerequisite) -> Self {
        self.prerequisite = prerequisite;
        self
    }

    /// Requires another course, referenced by title or code.
    pub fn requires(mut self, reference: impl Into<String>) -> Self {
        self.prerequisite = Prerequisite::CourseRef(reference.into());
        self
    }

    /// Restricts the course to the final term.
    pub fn final_term_only(mut self) -> Self {
        self.prerequisite = Prerequisite::FinalTermOnly;
        self
    }

    /// Sets the priority score.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the display category.
    pub fn with_kind(mut self, kind: CourseKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the instructor name.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = Some(instructor.into());
        self
    }

    /// Sets the meeting time.
    pub fn with_meeting_time(mut self, meeting_time: impl Into<String>) -> Self {
        self.meeting_time = Some(meeting_time.into());
        self
    }

    /// Whether `reference` names this course by title or by code.
    #[inline]
    pub fn matches_reference(&self, reference: &str) -> bool {
        self.title == reference || self.course_code == reference
    }
}

/// Prerequisite condition of a course.
///
/// Replaces the free-text sentinels of the source data ("NULL",
/// "FINAL SEMESTER") with explicit variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prerequisite {
    /// No prerequisite.
    #[default]
    None,
    /// Another course, referenced by title or course code.
    CourseRef(String),
    /// Only schedulable in the last term of the plan.
    FinalTermOnly,
}

impl Prerequisite {
    /// Parses a raw prerequisite field.
    ///
    /// Sentinels are matched case-insensitively after trimming:
    /// - `""`, `"NULL"`, `"none"`, `"no prerequisite"` → [`Prerequisite::None`]
    /// - `"final term only"`, `"final semester"` → [`Prerequisite::FinalTermOnly`]
    ///
    /// Anything else is a course reference.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" | "null" | "none" | "no prerequisite" => Self::None,
            "final term only" | "final semester" | "final semester only" => Self::FinalTermOnly,
            _ => Self::CourseRef(trimmed.to_string()),
        }
    }

    /// The referenced course, if any.
    pub fn reference(&self) -> Option<&str> {
        match self {
            Self::CourseRef(r) => Some(r.as_str()),
            _ => None,
        }
    }

    /// Whether there is no prerequisite at all.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for Prerequisite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::CourseRef(r) => write!(f, "{r}"),
            Self::FinalTermOnly => write!(f, "final term only"),
        }
    }
}

/// Display category of a course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseKind {
    Core,
    Elective,
    #[default]
    Major,
    Minor,
}

/// A raw course row as supplied by the data-access layer.
///
/// Field names follow the store's column names; `code` and
/// `Prerequisites` are accepted as aliases. Rows that only carry
/// `department_ID` and `course_id` get their code from those two columns;
/// see [`CourseRecord::resolved_code`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "code")]
    pub course_code: String,
    #[serde(default, rename = "department_ID", alias = "department_id")]
    pub department_id: Option<String>,
    #[serde(default)]
    pub course_id: Option<CourseNumber>,
    #[serde(default)]
    pub credits: Option<Credits>,
    #[serde(default, alias = "Prerequisites")]
    pub prerequisite: Option<String>,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub meeting_time: Option<String>,
}

impl CourseRecord {
    /// Creates a record with the given credit value.
    pub fn new(
        title: impl Into<String>,
        course_code: impl Into<String>,
        credits: impl Into<Credits>,
    ) -> Self {
        Self {
            title: title.into(),
            course_code: course_code.into(),
            department_id: None,
            course_id: None,
            credits: Some(credits.into()),
            prerequisite: None,
            instructor: None,
            meeting_time: None,
        }
    }

    /// Sets the raw prerequisite field.
    pub fn with_prerequisite(mut self, prerequisite: impl Into<String>) -> Self {
        self.prerequisite = Some(prerequisite.into());
        self
    }

    /// Sets the department and catalog number columns.
    pub fn with_department_number(
        mut self,
        department: impl Into<String>,
        number: impl Into<CourseNumber>,
    ) -> Self {
        self.department_id = Some(department.into());
        self.course_id = Some(number.into());
        self
    }

    /// Course code, trimmed.
    ///
    /// Falls back to department + number (e.g. `"CSCI"` + `101` →
    /// `"CSCI101"`) when no code column is set.
    pub fn resolved_code(&self) -> String {
        let code = self.course_code.trim();
        if !code.is_empty() {
            return code.to_string();
        }
        match (&self.department_id, &self.course_id) {
            (Some(department), Some(number)) => format!("{}{}", department.trim(), number),
            _ => String::new(),
        }
    }

    /// Sets the instructor name.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = Some(instructor.into());
        self
    }

    /// Sets the meeting time.
    pub fn with_meeting_time(mut self, meeting_time: impl Into<String>) -> Self {
        self.meeting_time = Some(meeting_time.into());
        self
    }
}

/// Catalog number column: numeric or text in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CourseNumber {
    Integer(i64),
    Text(String),
}

impl fmt::Display for CourseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{}", s.trim()),
        }
    }
}

impl From<u32> for CourseNumber {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<&str> for CourseNumber {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Raw credit value: the store may hold numbers or text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Credits {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl Credits {
    /// Resolves to a positive whole number of credits.
    ///
    /// Returns `None` for zero, negative, fractional, or non-numeric values.
    pub fn resolve(&self) -> Option<u32> {
        match self {
            Self::Integer(n) => u32::try_from(*n).ok().filter(|&c| c > 0),
            Self::Decimal(x) => {
                if x.fract() == 0.0 && *x > 0.0 && *x <= u32::MAX as f64 {
                    Some(*x as u32)
                } else {
                    None
                }
            }
            Self::Text(s) => s.trim().parse::<u32>().ok().filter(|&c| c > 0),
        }
    }
}

impl From<u32> for Credits {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<&str> for Credits {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
