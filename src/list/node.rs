//! Singly linked list node used by the list exercises.
//!
//! Links are `Option<Box<ListNode>>`, so every exercise takes the list by
//! value and hands back the new head instead of splicing through shared
//! pointers.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode {
    pub val: i64,
    pub next: Option<Box<ListNode>>,
}

impl ListNode {
    pub fn new(val: i64) -> Self {
        Self { val, next: None }
    }
}

/// Build a list holding `vals` front to back.
pub fn from_slice(vals: &[i64]) -> Option<Box<ListNode>> {
    let mut head = None;
    for &val in vals.iter().rev() {
        head = Some(Box::new(ListNode { val, next: head }));
    }
    head
}

/// Collect the list's values front to back.
pub fn to_vec(head: &Option<Box<ListNode>>) -> Vec<i64> {
    let mut out = Vec::new();
    let mut cursor = head;
    while let Some(node) = cursor {
        out.push(node.val);
        cursor = &node.next;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_a_list() {
        let list = from_slice(&[1, 2, 3]);
        assert_eq!(to_vec(&list), vec![1, 2, 3]);
    }

    #[test]
    fn empty_slice_builds_no_list() {
        assert_eq!(from_slice(&[]), None);
        assert!(to_vec(&None).is_empty());
    }
}
