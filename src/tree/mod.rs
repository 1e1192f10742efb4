pub mod build;
pub mod node;
pub mod traversal;

pub use node::{TreeLink, TreeNode};
