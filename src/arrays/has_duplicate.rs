use std::collections::HashSet;

/// True if any value occurs more than once.
pub fn has_duplicate(nums: &[i64]) -> bool {
    let mut seen = HashSet::with_capacity(nums.len());
    nums.iter().any(|&n| !seen.insert(n))
}
