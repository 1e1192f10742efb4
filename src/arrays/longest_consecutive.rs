use std::collections::HashSet;

/// Length of the longest run of consecutive integers in `nums`, O(n).
///
/// Only numbers with no predecessor in the set start a run, so each element
/// is inspected a constant number of times.
pub fn longest_consecutive(nums: &[i64]) -> usize {
    let set: HashSet<i64> = nums.iter().copied().collect();
    let mut longest = 0;

    for &num in &set {
        if set.contains(&(num - 1)) {
            continue;
        }
        let mut current = num;
        let mut length = 1;
        while set.contains(&(current + 1)) {
            current += 1;
            length += 1;
        }
        longest = longest.max(length);
    }
    longest
}
