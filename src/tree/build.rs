use std::collections::VecDeque;
use std::rc::Rc;

use super::node::{TreeLink, TreeNode};

/// Build a binary tree from a level-order value list where `None` marks an
/// absent child, e.g. `[3, 9, 20, None, None, 15, 7]`.
///
/// A queue of parents is filled left to right; each parent consumes the next
/// two values as its children. Absent children still consume a slot but add
/// no node.
pub fn build_from_level_order(vals: &[Option<i64>]) -> TreeLink {
    let root_val = match vals.first() {
        Some(Some(val)) => *val,
        _ => return None,
    };

    let root = TreeNode::new(root_val);
    let mut parents = VecDeque::from([Rc::clone(&root)]);
    let mut i = 1;

    while i < vals.len() {
        let Some(parent) = parents.pop_front() else {
            break;
        };

        if let Some(Some(val)) = vals.get(i) {
            let left = TreeNode::new(*val);
            parent.borrow_mut().left = Some(Rc::clone(&left));
            parents.push_back(left);
        }
        i += 1;

        if let Some(Some(val)) = vals.get(i) {
            let right = TreeNode::new(*val);
            parent.borrow_mut().right = Some(Rc::clone(&right));
            parents.push_back(right);
        }
        i += 1;
    }

    Some(root)
}

#[cfg(test)]
mod tests {
    use super::super::traversal::level_order;
    use super::*;

    #[test]
    fn builds_from_level_order_values() {
        let root = build_from_level_order(&[
            Some(3),
            Some(9),
            Some(20),
            None,
            None,
            Some(15),
            Some(7),
        ]);
        assert_eq!(
            level_order(&root),
            vec![vec![3], vec![9, 20], vec![15, 7]]
        );
    }

    #[test]
    fn gaps_leave_missing_children() {
        let root = build_from_level_order(&[Some(1), Some(2), Some(3), None, Some(4)]);
        assert_eq!(level_order(&root), vec![vec![1], vec![2, 3], vec![4]]);
    }

    #[test]
    fn empty_and_null_rooted_inputs() {
        assert!(build_from_level_order(&[]).is_none());
        assert!(build_from_level_order(&[None]).is_none());
    }
}
