//! Depth-first exact subset-sum search.
//!
//! Enumerates subsets in index order, abandoning a branch as soon as its
//! sum would exceed the budget, or when even taking every remaining item
//! cannot beat the best sum found so far. Stops early on a perfect fit.
//!
//! # Complexity
//! O(2^n) worst case; intended for small tiers.

struct Search<'a> {
    credits: &'a [u32],
    /// `suffix[i]` = sum of `credits[i..]`.
    suffix: Vec<u64>,
    budget: u64,
    combo: Vec<usize>,
    best: Vec<usize>,
    best_total: u64,
}

impl Search<'_> {
    fn backtrack(&mut self, start: usize, total: u64) {
        if total > self.best_total {
            self.best_total = total;
            self.best = self.combo.clone();
        }
        if self.best_total == self.budget {
            return;
        }
        if total + self.suffix[start] <= self.best_total {
            return;
        }

        for i in start..self.credits.len() {
            let next = total + u64::from(self.credits[i]);
            if next > self.budget {
                continue;
            }
            self.combo.push(i);
            self.backtrack(i + 1, next);
            self.combo.pop();
            if self.best_total == self.budget {
                return;
            }
        }
    }
}

/// Indices (ascending) of a subset with the maximum sum ≤ `budget`.
pub(crate) fn best_subset(credits: &[u32], budget: u32) -> Vec<usize> {
    let mut suffix = vec![0u64; credits.len() + 1];
    for i in (0..credits.len()).rev() {
        suffix[i] = suffix[i + 1] + u64::from(credits[i]);
    }

    let mut search = Search {
        credits,
        suffix,
        budget: u64::from(budget),
        combo: Vec::with_capacity(credits.len()),
        best: Vec::new(),
        best_total: 0,
    };
    search.backtrack(0, 0);
    search.best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum(credits: &[u32], picks: &[usize]) -> u32 {
        picks.iter().map(|&i| credits[i]).sum()
    }

    #[test]
    fn test_exact_fit_found() {
        let credits = [5, 4, 4, 3];
        let picks = best_subset(&credits, 8);
        assert_eq!(sum(&credits, &picks), 8);
    }

    #[test]
    fn test_first_subset_in_index_order() {
        // {5,3} is reached before {4,4}.
        let credits = [5, 4, 4, 3];
        assert_eq!(best_subset(&credits, 8), vec![0, 3]);
    }

    #[test]
    fn test_beats_greedy() {
        // Greedy by order takes 6 then stops at 6; optimum is 4+4 = 8.
        let credits = [6, 4, 4];
        let picks = best_subset(&credits, 8);
        assert_eq!(sum(&credits, &picks), 8);
        assert_eq!(picks, vec![1, 2]);
    }

    #[test]
    fn test_nothing_fits() {
        assert!(best_subset(&[9, 10], 8).is_empty());
        assert!(best_subset(&[], 8).is_empty());
        assert!(best_subset(&[3], 0).is_empty());
    }

    #[test]
    fn test_all_fit() {
        let credits = [1, 2, 3];
        assert_eq!(best_subset(&credits, 100), vec![0, 1, 2]);
    }
}
