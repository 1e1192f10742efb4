use std::collections::{BinaryHeap, HashMap};

/// The `k` most frequent values of `nums`, most frequent first. Ties break
/// on the larger value so the output is deterministic.
pub fn top_k_frequent(nums: &[i64], k: usize) -> Vec<i64> {
    let mut counts: HashMap<i64, usize> = HashMap::new();
    for &num in nums {
        *counts.entry(num).or_insert(0) += 1;
    }

    let mut heap: BinaryHeap<(usize, i64)> =
        counts.into_iter().map(|(num, freq)| (freq, num)).collect();

    let mut out = Vec::with_capacity(k);
    for _ in 0..k {
        match heap.pop() {
            Some((_, num)) => out.push(num),
            None => break,
        }
    }
    out
}
