use std::collections::VecDeque;
use std::rc::Rc;

use super::node::TreeLink;

/// In-order (left, node, right) depth-first traversal.
pub fn in_order(root: &TreeLink) -> Vec<i64> {
    fn visit(link: &TreeLink, out: &mut Vec<i64>) {
        if let Some(node) = link {
            let node = node.borrow();
            visit(&node.left, out);
            out.push(node.val);
            visit(&node.right, out);
        }
    }

    let mut out = Vec::new();
    visit(root, &mut out);
    out
}

/// Level-order traversal, one inner vector per depth.
pub fn level_order(root: &TreeLink) -> Vec<Vec<i64>> {
    let Some(root) = root else {
        return Vec::new();
    };

    let mut levels = Vec::new();
    let mut queue = VecDeque::from([Rc::clone(root)]);

    while !queue.is_empty() {
        let width = queue.len();
        let mut level = Vec::with_capacity(width);
        for _ in 0..width {
            let Some(node) = queue.pop_front() else {
                break;
            };
            let node = node.borrow();
            level.push(node.val);
            if let Some(left) = &node.left {
                queue.push_back(Rc::clone(left));
            }
            if let Some(right) = &node.right {
                queue.push_back(Rc::clone(right));
            }
        }
        levels.push(level);
    }
    levels
}
