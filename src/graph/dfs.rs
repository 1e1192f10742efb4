use std::collections::HashSet;
use std::hash::Hash;

use super::adjacency::Graph;

/// Iterative depth-first traversal from `start`, returning nodes in first-visit
/// order.
///
/// Pops the most recently pushed node, emits it on first visit, then pushes
/// its still-unvisited neighbours in neighbour order (so they pop in reverse).
/// A node may sit on the stack more than once; the pop-time visited check
/// keeps the output free of repeats. Visitation order therefore differs from
/// recursive pre-order DFS.
///
/// A `start` the graph has never seen yields `[start]`.
pub fn dfs<N: Copy + Eq + Hash>(graph: &Graph<N>, start: N) -> Vec<N> {
    let mut visited = HashSet::new();
    let mut stack = vec![start];
    let mut order = Vec::new();

    while let Some(node) = stack.pop() {
        if visited.insert(node) {
            order.push(node);
        }
        for &n in graph.neighbors(node) {
            if !visited.contains(&n) {
                stack.push(n);
            }
        }
    }
    order
}
