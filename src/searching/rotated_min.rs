/// Minimum of a sorted array of distinct values rotated some number of
/// times, O(log n).
///
/// If the midpoint exceeds the right end, the minimum sits in the right
/// half; otherwise the midpoint itself may be the minimum, so the right
/// bound moves onto it.
pub fn rotated_min(nums: &[i64]) -> Option<i64> {
    if nums.is_empty() {
        return None;
    }
    let mut left = 0;
    let mut right = nums.len() - 1;
    while left < right {
        let mid = left + (right - left) / 2;
        if nums[mid] > nums[right] {
            left = mid + 1;
        } else {
            right = mid;
        }
    }
    Some(nums[left])
}
