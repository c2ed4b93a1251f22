//! Input validation and screening for course catalogs.
//!
//! Two layers:
//! - [`validate_courses`] reports every structural problem at once
//!   (duplicate titles, zero credits, dangling or self references,
//!   prerequisite cycles) without changing anything.
//! - [`screen_records`] / [`screen_courses`] drop rows that cannot be
//!   planned and turn them into [`UnplacedCourse`] entries, so a planning
//!   run never fails on bad data.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::models::{Course, CourseRecord, Prerequisite, UnplacedCourse, UnplacedReason};
use crate::prerequisites::CourseResolver;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
    /// Title of the offending course, when known.
    pub course: Option<String>,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two courses share the same title.
    DuplicateTitle,
    /// Credits are missing, zero, or not a whole number.
    InvalidCredits,
    /// A course has an empty title.
    MissingTitle,
    /// A prerequisite references no known course.
    UnresolvedPrerequisite,
    /// A course lists itself as prerequisite.
    SelfPrerequisite,
    /// Prerequisite graph contains a cycle.
    CyclicDependency,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            course: None,
        }
    }

    fn for_course(mut self, title: impl Into<String>) -> Self {
        self.course = Some(title.into());
        self
    }
}

/// Validates a course catalog.
///
/// Checks:
/// 1. Every course has a non-empty title
/// 2. No duplicate titles
/// 3. Every course has positive credits
/// 4. No course requires itself
/// 5. All prerequisite references resolve to a course
/// 6. No circular prerequisite chains
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_courses(courses: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut titles = HashSet::new();
    for course in courses {
        if course.title.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingTitle,
                format!("Course with code '{}' has no title", course.course_code),
            ));
            continue;
        }
        if !titles.insert(course.title.as_str()) {
            errors.push(
                ValidationError::new(
                    ValidationErrorKind::DuplicateTitle,
                    format!("Duplicate course title: {}", course.title),
                )
                .for_course(&course.title),
            );
        }
        if course.credits == 0 {
            errors.push(
                ValidationError::new(
                    ValidationErrorKind::InvalidCredits,
                    format!("Course '{}' has zero credits", course.title),
                )
                .for_course(&course.title),
            );
        }
    }

    let resolver = CourseResolver::new(courses);
    for course in courses {
        let Some(reference) = course.prerequisite.reference() else {
            continue;
        };
        if course.matches_reference(reference) {
            errors.push(
                ValidationError::new(
                    ValidationErrorKind::SelfPrerequisite,
                    format!("Course '{}' requires itself", course.title),
                )
                .for_course(&course.title),
            );
        } else if resolver.resolve(reference).is_none() {
            errors.push(
                ValidationError::new(
                    ValidationErrorKind::UnresolvedPrerequisite,
                    format!(
                        "Course '{}' references unknown prerequisite '{}'",
                        course.title, reference
                    ),
                )
                .for_course(&course.title),
            );
        }
    }

    if let Some(cycle_err) = detect_cycles(courses, &resolver) {
        errors.push(cycle_err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the prerequisite graph using DFS.
///
/// # Algorithm
/// Topological sort via DFS. If a back-edge is found (visiting a node
/// currently in the recursion stack), a cycle exists. Self references
/// are reported separately and skipped here.
///
/// # Reference
/// Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4
fn detect_cycles(courses: &[Course], resolver: &CourseResolver<'_>) -> Option<ValidationError> {
    // Adjacency list: prerequisite index → dependent indices
    let mut adj: HashMap<usize, Vec<usize>> = HashMap::new();
    for (i, course) in courses.iter().enumerate() {
        let Some(reference) = course.prerequisite.reference() else {
            continue;
        };
        if let Some(p) = resolver.resolve(reference) {
            if p != i {
                adj.entry(p).or_default().push(i);
            }
        }
    }

    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for node in 0..courses.len() {
        if !visited.contains(&node) && has_cycle_dfs(node, &adj, &mut visited, &mut in_stack) {
            let title = &courses[node].title;
            return Some(
                ValidationError::new(
                    ValidationErrorKind::CyclicDependency,
                    format!("Circular prerequisite chain detected involving course '{title}'"),
                )
                .for_course(title),
            );
        }
    }

    None
}

fn has_cycle_dfs(
    node: usize,
    adj: &HashMap<usize, Vec<usize>>,
    visited: &mut HashSet<usize>,
    in_stack: &mut HashSet<usize>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(&node) {
        for &next in neighbors {
            if in_stack.contains(&next) {
                return true; // Back edge → cycle
            }
            if !visited.contains(&next) && has_cycle_dfs(next, adj, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(&node);
    false
}

/// Converts a raw row into a course.
///
/// Fails on an empty title or unreadable credits. Titles and codes are
/// trimmed, the code comes from [`CourseRecord::resolved_code`], and the
/// prerequisite field is parsed with [`Prerequisite::parse`].
pub fn course_from_record(record: CourseRecord) -> Result<Course, ValidationError> {
    let title = record.title.trim().to_string();
    let code = record.resolved_code();
    if title.is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::MissingTitle,
            format!("Course with code '{code}' has no title"),
        ));
    }

    let Some(credits) = record.credits.as_ref().and_then(|c| c.resolve()) else {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidCredits,
            format!("Course '{title}' has missing or invalid credits"),
        )
        .for_course(title));
    };

    let prerequisite = record
        .prerequisite
        .as_deref()
        .map(Prerequisite::parse)
        .unwrap_or_default();

    let mut course = Course::new(title, code, credits).with_prerequisite(prerequisite);
    course.instructor = record.instructor;
    course.meeting_time = record.meeting_time;
    Ok(course)
}

/// Courses fit for planning plus the rows set aside.
#[derive(Debug, Clone, Default)]
pub struct Screened {
    /// Plannable courses in input order.
    pub courses: Vec<Course>,
    /// Rejected rows, each with an [`UnplacedReason::InvalidRecord`].
    pub rejected: Vec<UnplacedCourse>,
}

/// Converts and screens raw rows.
///
/// Rows failing [`course_from_record`] are rejected; the survivors go
/// through [`screen_courses`].
pub fn screen_records(records: Vec<CourseRecord>) -> Screened {
    let mut rejected = Vec::new();
    let mut courses = Vec::with_capacity(records.len());

    for record in records {
        let title = record.title.trim().to_string();
        let code = record.resolved_code();
        match course_from_record(record) {
            Ok(course) => courses.push(course),
            Err(err) => {
                warn!(course = %title, error = %err.message, "rejected course record");
                rejected.push(UnplacedCourse {
                    title,
                    course_code: code,
                    credits: None,
                    reason: UnplacedReason::InvalidRecord(err.message),
                });
            }
        }
    }

    let mut screened = screen_courses(courses);
    rejected.append(&mut screened.rejected);
    screened.rejected = rejected;
    screened
}

/// Drops courses that cannot be planned.
///
/// Rejects empty titles, zero credits, and repeated titles (the first
/// occurrence is kept).
pub fn screen_courses(courses: Vec<Course>) -> Screened {
    let mut seen: HashSet<String> = HashSet::new();
    let mut screened = Screened::default();

    for course in courses {
        let problem = if course.title.trim().is_empty() {
            Some(format!(
                "Course with code '{}' has no title",
                course.course_code
            ))
        } else if course.credits == 0 {
            Some(format!("Course '{}' has zero credits", course.title))
        } else if seen.contains(&course.title) {
            Some(format!("Duplicate course title: {}", course.title))
        } else {
            None
        };

        match problem {
            Some(message) => {
                warn!(course = %course.title, error = %message, "rejected course");
                screened.rejected.push(UnplacedCourse::from_course(
                    &course,
                    UnplacedReason::InvalidRecord(message),
                ));
            }
            None => {
                seen.insert(course.title.clone());
                screened.courses.push(course);
            }
        }
    }

    screened
}
