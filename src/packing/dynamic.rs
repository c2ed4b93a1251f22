//! Dynamic-programming subset-sum (0/1 knapsack on reachability).
//!
//! Marks every reachable sum ≤ budget, remembering the item that first
//! reached it, then walks back from the largest reachable sum.
//!
//! # Complexity
//! O(n · B) time, O(B) memory, where B = min(budget, Σ credits).

/// Indices (ascending) of a subset with the maximum sum ≤ `budget`.
pub(crate) fn best_subset(credits: &[u32], budget: u32) -> Vec<usize> {
    let total: u64 = credits.iter().map(|&c| u64::from(c)).sum();
    let cap = u64::from(budget).min(total) as usize;

    let mut reached_by: Vec<Option<usize>> = vec![None; cap + 1];
    let mut reachable = vec![false; cap + 1];
    reachable[0] = true;

    for (item, &c) in credits.iter().enumerate() {
        let c = c as usize;
        if c == 0 || c > cap {
            continue;
        }
        // Descending so each item is used at most once.
        for sum in (c..=cap).rev() {
            if reachable[sum - c] && !reachable[sum] {
                reachable[sum] = true;
                reached_by[sum] = Some(item);
            }
        }
    }

    let Some(best) = (0..=cap).rev().find(|&s| reachable[s]) else {
        return Vec::new();
    };

    let mut picks = Vec::new();
    let mut sum = best;
    while let Some(item) = reached_by[sum] {
        picks.push(item);
        sum -= credits[item] as usize;
    }
    picks.sort_unstable();
    picks
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
    fn test_picks_are_distinct() {
        let credits = [4, 4, 4];
        let picks = best_subset(&credits, 12);
        assert_eq!(picks, vec![0, 1, 2]);
    }

    #[test]
    fn test_budget_above_total() {
        let credits = [2, 3];
        assert_eq!(best_subset(&credits, u32::MAX), vec![0, 1]);
    }

    #[test]
    fn test_nothing_fits() {
        assert!(best_subset(&[9, 10], 8).is_empty());
        assert!(best_subset(&[], 8).is_empty());
    }

    #[test]
    fn test_large_tier() {
        let credits: Vec<u32> = (0..40).map(|i| 3 + (i % 3)).collect();
        let picks = best_subset(&credits, 17);
        assert_eq!(sum(&credits, &picks), 17);
    }
}
