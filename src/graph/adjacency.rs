//! Map-based adjacency representation built from an edge list.
//!
//! Variables:
//!   adj[u] = Vec<N> of out-neighbours of u, in edge-insertion order
//!
//! Equations:
//!   from_edges(E): for each (u, v) in E, adj[u].push(v)
//!   neighbors(u)  = adj[u]  if u has outgoing edges, else []
//!   edge_count    = sum_u |adj[u]|
//!
//! The graph is directed by construction: callers wanting undirected
//! semantics supply both (u, v) and (v, u). Endpoints with no outgoing
//! edges never become keys; `neighbors` treats a missing key as an empty
//! neighbour list rather than an error.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct Graph<N> {
    adj: HashMap<N, Vec<N>>,
}

impl<N: Copy + Eq + Hash> Graph<N> {
    /// Build a directed graph from `(u, v)` edge pairs. Duplicate edges are
    /// kept as duplicate neighbour entries, not deduplicated. Construction
    /// cannot fail.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut adj: HashMap<N, Vec<N>> = HashMap::new();
        for (u, v) in edges {
            adj.entry(u).or_default().push(v);
        }
        Self { adj }
    }

    /// Out-neighbours of `node` in insertion order. Total: a node the edge
    /// list never mentioned as a source has no neighbours.
    pub fn neighbors(&self, node: N) -> &[N] {
        self.adj.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of nodes with at least one outgoing edge.
    pub fn source_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbours_keep_insertion_order() {
        let g = Graph::from_edges([(0, 1), (0, 2), (1, 3), (2, 4), (3, 4)]);
        assert_eq!(g.neighbors(0), &[1, 2]);
        assert_eq!(g.neighbors(1), &[3]);
        assert_eq!(g.edge_count(), 5);
    }

    #[test]
    fn every_edge_appears_with_multiplicity() {
        let edges = [(0, 1), (0, 1), (0, 2), (1, 0)];
        let g = Graph::from_edges(edges);
        for (u, v) in edges {
            let hits = g.neighbors(u).iter().filter(|&&n| n == v).count();
            let expected = edges.iter().filter(|&&e| e == (u, v)).count();
            assert_eq!(hits, expected, "edge ({u}, {v})");
        }
    }

    #[test]
    fn missing_key_has_no_neighbours() {
        let g = Graph::from_edges([(0, 1)]);
        assert_eq!(g.neighbors(1), &[] as &[i32]);
        assert_eq!(g.neighbors(99), &[] as &[i32]);
    }

    #[test]
    fn directed_by_construction() {
        let g = Graph::from_edges([(0, 1)]);
        assert_eq!(g.neighbors(0), &[1]);
        assert!(g.neighbors(1).is_empty());
        assert_eq!(g.source_count(), 1);
    }

    #[test]
    fn empty_edge_list_builds_empty_graph() {
        let g: Graph<u32> = Graph::from_edges([]);
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
    }
}
