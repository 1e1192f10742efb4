use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use super::adjacency::Graph;

/// Breadth-first traversal from `start`, returning nodes in non-decreasing
/// edge-count distance.
///
/// Visited marking happens at enqueue time, so each node enters the queue at
/// most once and traversal terminates on cyclic graphs. A `start` the graph
/// has never seen yields `[start]`.
pub fn bfs<N: Copy + Eq + Hash>(graph: &Graph<N>, start: N) -> Vec<N> {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    let mut order = Vec::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for &n in graph.neighbors(node) {
            if visited.insert(n) {
                queue.push_back(n);
            }
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visits_in_level_order() {
        let g = Graph::from_edges([(0, 1), (0, 2), (1, 3), (2, 4), (3, 4)]);
        let order = bfs(&g, 0);
        assert_eq!(order[0], 0);
        let level_one: HashSet<_> = order[1..3].iter().copied().collect();
        let level_two: HashSet<_> = order[3..].iter().copied().collect();
        assert_eq!(level_one, HashSet::from([1, 2]));
        assert_eq!(level_two, HashSet::from([3, 4]));
    }

    #[test]
    fn each_reachable_node_exactly_once() {
        let g = Graph::from_edges([(0, 1), (0, 2), (1, 2), (2, 0), (2, 3)]);
        let order = bfs(&g, 0);
        let unique: HashSet<_> = order.iter().copied().collect();
        assert_eq!(order.len(), unique.len());
        assert_eq!(unique, HashSet::from([0, 1, 2, 3]));
    }

    #[test]
    fn cycles_terminate() {
        let g = Graph::from_edges([(0, 1), (1, 0)]);
        assert_eq!(bfs(&g, 0), vec![0, 1]);
    }

    #[test]
    fn isolated_start_yields_singleton() {
        let g = Graph::from_edges([(0, 1)]);
        assert_eq!(bfs(&g, 9), vec![9]);
    }

    #[test]
    fn traversal_does_not_mutate_the_graph() {
        let g = Graph::from_edges([(0, 1), (1, 2), (2, 0)]);
        assert_eq!(bfs(&g, 0), bfs(&g, 0));
    }
}
