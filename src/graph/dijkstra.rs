use std::cmp::Ordering;
use std::collections::BinaryHeap;

use thiserror::Error;

/// Distance recorded for nodes no path from the start reaches.
pub const INFINITY: u64 = u64::MAX;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DijkstraError {
    #[error("start node {start} is out of range for a graph of {len} nodes")]
    StartOutOfRange { start: usize, len: usize },
}

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    cost: u64,
    node: usize,
}

// Comparison is reversed so the BinaryHeap pops the smallest cost first.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-source shortest paths over a weighted adjacency list, where
/// `adj[u]` holds `(v, weight)` pairs for each edge `u -> v`.
///
/// Lazy-deletion variant: relaxing a node pushes a fresh queue entry without
/// removing the old one, and entries whose cost exceeds the recorded best
/// distance are discarded on pop. Once a node pops with a live entry its
/// recorded distance is final. Unreachable nodes keep [`INFINITY`].
///
/// Weights are unsigned, so the non-negativity precondition the correctness
/// proof relies on holds by construction. A `start` outside `[0, adj.len())`
/// fails fast with [`DijkstraError::StartOutOfRange`].
pub fn dijkstra(adj: &[Vec<(usize, u64)>], start: usize) -> Result<Vec<u64>, DijkstraError> {
    if start >= adj.len() {
        return Err(DijkstraError::StartOutOfRange {
            start,
            len: adj.len(),
        });
    }

    let mut dist = vec![INFINITY; adj.len()];
    let mut heap = BinaryHeap::new();

    dist[start] = 0;
    heap.push(State {
        cost: 0,
        node: start,
    });

    while let Some(State { cost, node }) = heap.pop() {
        if cost > dist[node] {
            continue; // stale entry left behind by an earlier relaxation
        }

        for &(next, weight) in &adj[node] {
            // Saturate so absurdly large weights cannot wrap past the sentinel.
            let candidate = cost.saturating_add(weight);
            if candidate < dist[next] {
                dist[next] = candidate;
                heap.push(State {
                    cost: candidate,
                    node: next,
                });
            }
        }
    }
    Ok(dist)
}
