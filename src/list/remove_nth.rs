use super::node::ListNode;

/// Remove the `n`th node counted from the end (1-based) and return the new
/// head. An `n` of zero or beyond the list length leaves the list unchanged.
///
/// One pass measures the length, a second walks to the node before the
/// victim and splices around it.
pub fn remove_nth_from_end(head: Option<Box<ListNode>>, n: usize) -> Option<Box<ListNode>> {
    let mut len = 0;
    let mut cursor = &head;
    while let Some(node) = cursor {
        len += 1;
        cursor = &node.next;
    }
    if n == 0 || n > len {
        return head;
    }

    let mut head = head;
    let mut slot = &mut head;
    for _ in 0..len - n {
        if let Some(node) = slot {
            slot = &mut node.next;
        }
    }
    if let Some(victim) = slot.take() {
        *slot = victim.next;
    }
    head
}
