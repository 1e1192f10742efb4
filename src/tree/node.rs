use std::cell::RefCell;
use std::rc::Rc;

/// Shared, mutable link between tree nodes. `Rc<RefCell<_>>` rather than
/// `Box` because construction hands out handles to interior nodes while the
/// tree is still growing.
pub type TreeLink = Option<Rc<RefCell<TreeNode>>>;

#[derive(Debug, PartialEq, Eq)]
pub struct TreeNode {
    pub val: i64,
    pub left: TreeLink,
    pub right: TreeLink,
}

impl TreeNode {
    pub fn new(val: i64) -> Rc<RefCell<TreeNode>> {
        Rc::new(RefCell::new(TreeNode {
            val,
            left: None,
            right: None,
        }))
    }
}
