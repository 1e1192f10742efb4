use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::node::ListNode;

/// One detached list head waiting in the merge heap. Ordering is an explicit
/// key of (value, source list) rather than an ordering on the node itself;
/// the source index breaks ties so the merge is stable across equal values.
struct Pending {
    val: i64,
    source: usize,
    node: Box<ListNode>,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.val == other.val && self.source == other.source
    }
}

impl Eq for Pending {}

// Reversed so the BinaryHeap pops the smallest value first.
impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .val
            .cmp(&self.val)
            .then_with(|| other.source.cmp(&self.source))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Merge `k` sorted lists into one sorted list.
///
/// The heap holds at most one node per source list: popping the minimum
/// promotes that node's successor. O(N log k) for N total nodes.
pub fn merge_k_sorted(lists: Vec<Option<Box<ListNode>>>) -> Option<Box<ListNode>> {
    let mut heap = BinaryHeap::new();
    for (source, list) in lists.into_iter().enumerate() {
        if let Some(node) = list {
            heap.push(Pending {
                val: node.val,
                source,
                node,
            });
        }
    }

    let mut merged = Vec::new();
    while let Some(Pending {
        source, mut node, ..
    }) = heap.pop()
    {
        if let Some(next) = node.next.take() {
            heap.push(Pending {
                val: next.val,
                source,
                node: next,
            });
        }
        merged.push(node);
    }

    let mut head = None;
    while let Some(mut node) = merged.pop() {
        node.next = head;
        head = Some(node);
    }
    head
}
