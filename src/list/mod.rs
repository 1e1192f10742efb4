pub mod merge_k;
pub mod node;
pub mod remove_nth;
pub mod reorder;

pub use node::ListNode;
