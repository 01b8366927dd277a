//! Re-exports of the most commonly used items in `route_core`.
pub use crate::error::GraphError;
pub use crate::graph::node_index;
pub use crate::graph::Graph;
pub use crate::graph::NodeIndex;

pub use crate::search;
pub use crate::search::dijkstra::Dijkstra;
pub use crate::search::heap_dijkstra::HeapDijkstra;
pub use crate::search::shortest_path::ShortestPath;
