use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// The `k` largest values of `nums` in ascending order, via a bounded
/// min-heap: anything smaller than the heap root can never be in the top k.
/// Returns an empty vector when `k` is zero or exceeds the input length.
pub fn top_k_largest(nums: &[i64], k: usize) -> Vec<i64> {
    if k == 0 || k > nums.len() {
        return Vec::new();
    }
    let mut heap: BinaryHeap<Reverse<i64>> = BinaryHeap::with_capacity(k);
    for &num in nums {
        if heap.len() < k {
            heap.push(Reverse(num));
        } else if num > heap.peek().map(|r| r.0).unwrap_or(i64::MAX) {
            heap.pop();
            heap.push(Reverse(num));
        }
    }
    let mut out: Vec<i64> = heap.into_iter().map(|Reverse(n)| n).collect();
    out.sort_unstable();
    out
}

/// The `k` smallest values of `nums` in ascending order, via a bounded
/// max-heap (the mirror image of [`top_k_largest`]).
pub fn top_k_smallest(nums: &[i64], k: usize) -> Vec<i64> {
    if k == 0 || k > nums.len() {
        return Vec::new();
    }
    let mut heap: BinaryHeap<i64> = BinaryHeap::with_capacity(k);
    for &num in nums {
        if heap.len() < k {
            heap.push(num);
        } else if num < heap.peek().copied().unwrap_or(i64::MIN) {
            heap.pop();
            heap.push(num);
        }
    }
    let mut out: Vec<i64> = heap.into_vec();
    out.sort_unstable();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn largest_values_in_ascending_order() {
        assert_eq!(
            top_k_largest(&[3, 1, 5, 1, 9, 2, 6, 8, 3, 5], 3),
            vec![6, 8, 9]
        );
    }

    #[test]
    fn smallest_values_in_ascending_order() {
        assert_eq!(
            top_k_smallest(&[3, 1, 5, 1, 9, 2, 6, 8, 3, 5], 4),
            vec![1, 1, 2, 3]
        );
    }

    #[test]
    fn k_equal_to_length_sorts_everything() {
        assert_eq!(top_k_largest(&[2, 1, 3], 3), vec![1, 2, 3]);
    }

    #[test]
    fn degenerate_k_yields_nothing() {
        assert!(top_k_largest(&[1, 2], 0).is_empty());
        assert!(top_k_largest(&[1, 2], 5).is_empty());
        assert!(top_k_smallest(&[], 1).is_empty());
    }
}
