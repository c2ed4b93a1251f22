//! Exact subset-sum packing of courses into a credit budget.
//!
//! Given a group of candidate courses and a remaining credit budget, finds
//! a subset whose credit sum is the largest value not exceeding the budget.
//! This is an exact optimization, never a greedy approximation.
//!
//! # Strategies
//!
//! | Strategy | Algorithm | Cost |
//! |----------|-----------|------|
//! | `Exhaustive` | DFS with bound pruning | O(2^n) |
//! | `DynamicProgramming` | Reachable-sum table | O(n · B) |
//! | `Auto` | DFS up to a tier size, DP above | min of the two |
//!
//! All strategies return the same maximum sum. When several subsets reach
//! it, which one is returned may differ between strategies.
//!
//! # Reference
//! Kellerer, Pferschy & Pisinger (2004), "Knapsack Problems", Ch. 4 (Subset Sum)

mod dynamic;
mod exhaustive;

use serde::{Deserialize, Serialize};

use crate::models::Course;

/// Which exact algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackingStrategy {
    /// Depth-first search over subsets.
    Exhaustive,
    /// Reachable-sum table.
    DynamicProgramming,
    /// DFS for groups of at most `exhaustive_limit` items, DP otherwise.
    Auto { exhaustive_limit: usize },
}

impl Default for PackingStrategy {
    fn default() -> Self {
        Self::Auto {
            exhaustive_limit: 20,
        }
    }
}

impl PackingStrategy {
    /// Indices (ascending) of a subset of `credits` with maximal sum ≤ `budget`.
    pub fn best_subset_indices(&self, credits: &[u32], budget: u32) -> Vec<usize> {
        match *self {
            Self::Exhaustive => exhaustive::best_subset(credits, budget),
            Self::DynamicProgramming => dynamic::best_subset(credits, budget),
            Self::Auto { exhaustive_limit } => {
                if credits.len() <= exhaustive_limit {
                    exhaustive::best_subset(credits, budget)
                } else {
                    dynamic::best_subset(credits, budget)
                }
            }
        }
    }

    /// Courses forming a maximal-credit subset within `budget`.
    pub fn best_credit_subset<'a>(&self, courses: &'a [Course], budget: u32) -> Vec<&'a Course> {
        let credits: Vec<u32> = courses.iter().map(|c| c.credits).collect();
        self.best_subset_indices(&credits, budget)
            .into_iter()
            .map(|i| &courses[i])
            .collect()
    }
}

/// Courses forming a maximal-credit subset within `budget`, using the
/// default strategy.
///
/// # Example
/// ```
/// use u_termplan::models::Course;
/// use u_termplan::packing::best_credit_subset;
///
/// let tier = vec![
///     Course::new("A", "A1", 5),
///     Course::new("B", "B1", 4),
///     Course::new("C", "C1", 4),
///     Course::new("D", "D1", 3),
/// ];
/// let picked = best_credit_subset(&tier, 8);
/// assert_eq!(picked.iter().map(|c| c.credits).sum::<u32>(), 8);
/// ```
pub fn best_credit_subset(courses: &[Course], budget: u32) -> Vec<&Course> {
    PackingStrategy::default().best_credit_subset(courses, budget)
}

/// Sum of credits of the given index set.
pub(crate) fn subset_credits(credits: &[u32], picks: &[usize]) -> u32 {
    picks.iter().map(|&i| credits[i]).sum()
}
