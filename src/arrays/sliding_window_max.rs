use std::collections::VecDeque;

/// Maximum of every window of `k` consecutive elements, O(n) via a monotonic
/// deque of indices.
///
/// The deque front always holds the index of the current window's maximum;
/// indices that fall out of the window are dropped from the front, smaller
/// values from the back. Returns an empty vector when `k` is zero or larger
/// than the input.
pub fn sliding_window_max(nums: &[i64], k: usize) -> Vec<i64> {
    if k == 0 || k > nums.len() {
        return Vec::new();
    }

    let mut maxima = Vec::with_capacity(nums.len() - k + 1);
    let mut dq: VecDeque<usize> = VecDeque::new();

    for i in 0..nums.len() {
        if dq.front() == Some(&(i.wrapping_sub(k))) {
            dq.pop_front();
        }
        while dq.back().is_some_and(|&j| nums[j] < nums[i]) {
            dq.pop_back();
        }
        dq.push_back(i);
        if i + 1 >= k {
            maxima.push(nums[dq[0]]);
        }
    }
    maxima
}
