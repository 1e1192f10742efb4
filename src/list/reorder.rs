use std::collections::VecDeque;

use super::node::ListNode;

/// Reorder `L0, L1, ..., Ln` into `L0, Ln, L1, Ln-1, ...` and return the new
/// head.
///
/// The nodes are detached into a deque, drawn alternately from the front and
/// the back, then relinked from the tail forward. Taking the list by value
/// sidesteps the pointer gymnastics the in-place version needs.
pub fn reorder(head: Option<Box<ListNode>>) -> Option<Box<ListNode>> {
    let mut nodes = VecDeque::new();
    let mut cursor = head;
    while let Some(mut node) = cursor {
        cursor = node.next.take();
        nodes.push_back(node);
    }

    let mut ordered = Vec::with_capacity(nodes.len());
    let mut from_front = true;
    loop {
        let next = if from_front {
            nodes.pop_front()
        } else {
            nodes.pop_back()
        };
        match next {
            Some(node) => ordered.push(node),
            None => break,
        }
        from_front = !from_front;
    }

    let mut head = None;
    while let Some(mut node) = ordered.pop() {
        node.next = head;
        head = Some(node);
    }
    head
}
