/// Maximum sum over all non-empty contiguous subarrays (Kadane), or `None`
/// for an empty slice.
pub fn max_subarray(nums: &[i64]) -> Option<i64> {
    let (&first, rest) = nums.split_first()?;
    let mut current = first;
    let mut best = first;
    for &num in rest {
        current = num.max(current + num);
        best = best.max(current);
    }
    Some(best)
}
