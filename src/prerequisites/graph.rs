//! Prerequisite chain builder.
//!
//! Walks each course's single-prerequisite link backward and records the
//! resolved ancestor titles, nearest first.
//!
//! # Resolution
//! A reference resolves to the course whose title equals it; failing that,
//! to the first course (input order) whose code equals it. A reference that
//! resolves to nothing ends the chain and is recorded in
//! [`PrerequisiteMap::unresolved`].
//!
//! # Cycle Guard
//! A walk never revisits a course. If the walk comes back to the course it
//! started from, that course sits on a cycle and is listed in
//! [`PrerequisiteMap::cyclic`].

use std::collections::{HashMap, HashSet};

use crate::models::Course;

/// Title → ordered ancestor titles (nearest first).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrerequisiteMap {
    chains: HashMap<String, Vec<String>>,
    order: Vec<String>,
    unresolved: Vec<UnresolvedReference>,
    cyclic: Vec<String>,
}

/// A prerequisite reference that matched no course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedReference {
    /// Title of the referencing course.
    pub course: String,
    /// The raw reference text.
    pub reference: String,
}

impl PrerequisiteMap {
    /// Full ancestor chain of a course.
    pub fn chain(&self, title: &str) -> Option<&[String]> {
        self.chains.get(title).map(Vec::as_slice)
    }

    /// Nearest resolved prerequisite of a course.
    pub fn direct_prerequisite(&self, title: &str) -> Option<&str> {
        self.chains
            .get(title)
            .and_then(|chain| chain.first())
            .map(String::as_str)
    }

    /// Course titles in input order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// `(title, chain)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.order
            .iter()
            .map(|t| (t.as_str(), self.chains[t].as_slice()))
    }

    /// Whether the map has an entry for `title`.
    pub fn contains(&self, title: &str) -> bool {
        self.chains.contains_key(title)
    }

    /// References that resolved to no course.
    pub fn unresolved(&self) -> &[UnresolvedReference] {
        &self.unresolved
    }

    /// Titles of courses whose walk returned to themselves.
    pub fn cyclic(&self) -> &[String] {
        &self.cyclic
    }

    /// Whether `title` sits on a prerequisite cycle.
    pub fn is_cyclic(&self, title: &str) -> bool {
        self.cyclic.iter().any(|t| t == title)
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Index for resolving free-text references to input positions.
pub(crate) struct CourseResolver<'a> {
    by_title: HashMap<&'a str, usize>,
    by_code: HashMap<&'a str, usize>,
}

impl<'a> CourseResolver<'a> {
    pub(crate) fn new(courses: &'a [Course]) -> Self {
        let mut by_title = HashMap::with_capacity(courses.len());
        let mut by_code = HashMap::with_capacity(courses.len());
        for (idx, course) in courses.iter().enumerate() {
            by_title.entry(course.title.as_str()).or_insert(idx);
            if !course.course_code.is_empty() {
                by_code.entry(course.course_code.as_str()).or_insert(idx);
            }
        }
        Self { by_title, by_code }
    }

    /// Title match first, then code match.
    pub(crate) fn resolve(&self, reference: &str) -> Option<usize> {
        self.by_title
            .get(reference)
            .or_else(|| self.by_code.get(reference))
            .copied()
    }
}

/// Builds the prerequisite map for one planning run.
///
/// Never fails: unresolvable references and cycles truncate the chain and
/// are reported through [`PrerequisiteMap::unresolved`] and
/// [`PrerequisiteMap::cyclic`].
pub fn build_prerequisite_map(courses: &[Course]) -> PrerequisiteMap {
    let resolver = CourseResolver::new(courses);
    let mut map = PrerequisiteMap::default();

    for (start, course) in courses.iter().enumerate() {
        if map.chains.contains_key(&course.title) {
            continue;
        }

        let mut chain = Vec::new();
        let mut visited: HashSet<usize> = HashSet::from([start]);
        let mut current = start;

        while let Some(reference) = courses[current].prerequisite.reference() {
            let Some(next) = resolver.resolve(reference) else {
                if current == start {
                    map.unresolved.push(UnresolvedReference {
                        course: course.title.clone(),
                        reference: reference.to_string(),
                    });
                }
                break;
            };
            if !visited.insert(next) {
                if next == start {
                    map.cyclic.push(course.title.clone());
                }
                break;
            }
            chain.push(courses[next].title.clone());
            current = next;
        }

        map.order.push(course.title.clone());
        map.chains.insert(course.title.clone(), chain);
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_courses() -> Vec<Course> {
        vec![
            Course::new("Calculus I", "MATH151", 4),
            Course::new("Calculus II", "MATH152", 4).requires("MATH151"),
            Course::new("Calculus III", "MATH253", 4).requires("Calculus II"),
            Course::new("Capstone", "MATH499", 3).final_term_only(),
        ]
    }

    #[test]
    fn test_chain_nearest_first() {
        let map = build_prerequisite_map(&linear_courses());

        assert_eq!(map.chain("Calculus I"), Some(&[][..]));
        assert_eq!(map.chain("Calculus II").unwrap(), ["Calculus I"]);
        assert_eq!(
            map.chain("Calculus III").unwrap(),
            ["Calculus II", "Calculus I"]
        );
        assert_eq!(map.chain("Capstone"), Some(&[][..]));
        assert_eq!(map.direct_prerequisite("Calculus III"), Some("Calculus II"));
        assert_eq!(map.direct_prerequisite("Calculus I"), None);
        assert!(map.unresolved().is_empty());
        assert!(map.cyclic().is_empty());
    }

    #[test]
    fn test_titles_in_input_order() {
        let map = build_prerequisite_map(&linear_courses());
        let titles: Vec<&str> = map.titles().collect();
        assert_eq!(
            titles,
            vec!["Calculus I", "Calculus II", "Calculus III", "Capstone"]
        );
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn test_title_takes_precedence_over_code() {
        // "X" is both the title of one course and the code of another.
        let courses = vec![
            Course::new("Alpha", "X", 3),
            Course::new("X", "B2", 3),
            Course::new("Child", "C3", 3).requires("X"),
        ];
        let map = build_prerequisite_map(&courses);
        assert_eq!(map.direct_prerequisite("Child"), Some("X"));
    }

    #[test]
    fn test_unresolved_reference_truncates() {
        let courses = vec![
            Course::new("Networks", "CSCI340", 3).requires("CSCI999"),
            Course::new("Distributed Systems", "CSCI440", 3).requires("CSCI340"),
        ];
        let map = build_prerequisite_map(&courses);

        assert_eq!(map.chain("Networks"), Some(&[][..]));
        assert_eq!(map.chain("Distributed Systems").unwrap(), ["Networks"]);
        assert_eq!(
            map.unresolved(),
            &[UnresolvedReference {
                course: "Networks".into(),
                reference: "CSCI999".into(),
            }]
        );
    }

    #[test]
    fn test_cycle_guard_terminates() {
        // A → B → C → A
        let courses = vec![
            Course::new("A", "A1", 3).requires("C"),
            Course::new("B", "B1", 3).requires("A"),
            Course::new("C", "C1", 3).requires("B"),
            Course::new("D", "D1", 3).requires("A"),
        ];
        let map = build_prerequisite_map(&courses);

        assert_eq!(map.chain("A").unwrap(), ["C", "B"]);
        assert_eq!(map.chain("D").unwrap(), ["A", "C", "B"]);
        for (title, chain) in map.iter() {
            assert!(!chain.iter().any(|t| t == title));
        }
        assert!(map.is_cyclic("A"));
        assert!(map.is_cyclic("B"));
        assert!(map.is_cyclic("C"));
        assert!(!map.is_cyclic("D"));
    }

    #[test]
    fn test_self_reference_is_cyclic() {
        let courses = vec![Course::new("Loop", "L1", 3).requires("L1")];
        let map = build_prerequisite_map(&courses);
        assert_eq!(map.chain("Loop"), Some(&[][..]));
        assert_eq!(map.cyclic(), ["Loop"]);
    }

    #[test]
    fn test_idempotent() {
        let courses = linear_courses();
        assert_eq!(
            build_prerequisite_map(&courses),
            build_prerequisite_map(&courses)
        );
    }

    #[test]
    fn test_empty_input() {
        let map = build_prerequisite_map(&[]);
        assert!(map.is_empty());
        assert!(!map.contains("anything"));
    }
}
