//! Fan-in priority scoring.
//!
//! A course's priority is the number of courses whose *direct*
//! prerequisite is that course. Transitive dependents are not counted.

use std::collections::HashMap;

use super::PrerequisiteMap;
use crate::models::Course;

/// Title → fan-in score.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriorityMap {
    scores: HashMap<String, u32>,
    order: Vec<String>,
}

impl PriorityMap {
    /// Score for a title (0 when absent).
    pub fn get(&self, title: &str) -> u32 {
        self.scores.get(title).copied().unwrap_or(0)
    }

    /// Entries sorted by descending score; ties keep input order.
    pub fn ranked(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self
            .order
            .iter()
            .map(|t| (t.as_str(), self.scores[t]))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// Sum of all scores, equal to the number of direct prerequisite edges.
    pub fn total_edges(&self) -> u32 {
        self.scores.values().sum()
    }

    /// Writes each course's score into `Course::priority`.
    pub fn apply(&self, courses: &mut [Course]) {
        for course in courses.iter_mut() {
            course.priority = self.get(&course.title);
        }
    }

    /// Number of scored courses.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no course was scored.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Scores every course in the map by direct fan-in.
pub fn calculate_priority(prereq_map: &PrerequisiteMap) -> PriorityMap {
    let mut priority = PriorityMap::default();

    for title in prereq_map.titles() {
        priority.scores.insert(title.to_string(), 0);
        priority.order.push(title.to_string());
    }

    for title in prereq_map.titles() {
        if let Some(direct) = prereq_map.direct_prerequisite(title) {
            *priority.scores.entry(direct.to_string()).or_insert(0) += 1;
        }
    }

    priority
}
