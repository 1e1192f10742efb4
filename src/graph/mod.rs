pub mod adjacency;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;

pub use adjacency::Graph;
pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::{dijkstra, DijkstraError, INFINITY};
