//! # dskit
//!
//! A library of classic algorithm and data-structure exercises, organized by
//! category. Each module is an independent, self-contained solution to a
//! single textbook or interview-style problem; nothing is shared between
//! problems and no state outlives a call.
//!
//! ## Modules
//!
//! - `graph` – Adjacency-list construction, BFS/DFS traversal, Dijkstra
//! - `arrays` – Scans, prefix products, in-place rearrangement
//! - `searching` – Binary-search variants (rotated array, sorted matrix)
//! - `sorting` – Quicksort, Dutch national flag partition
//! - `strings` – Anagrams, palindromes, prefix and window problems
//! - `dynamic_programming` – Coin change, word break
//! - `selection` – Heap-based top-k selection
//! - `list` – Singly linked list exercises
//! - `tree` – Binary tree construction and traversal
//! - `numerical` – Digit manipulation
//!
//! ## Usage Example
//!
//! ```rust
//! use dskit::graph::{bfs, Graph};
//!
//! let g = Graph::from_edges([(0, 1), (0, 2), (1, 3)]);
//! assert_eq!(bfs(&g, 0), vec![0, 1, 2, 3]);
//! ```

pub mod arrays;
pub mod dynamic_programming;
pub mod graph;
pub mod list;
pub mod numerical;
pub mod searching;
pub mod selection;
pub mod sorting;
pub mod strings;
pub mod tree;
