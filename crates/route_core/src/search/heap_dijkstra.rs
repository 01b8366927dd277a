use std::collections::BinaryHeap;

use crate::constants::Weight;
use crate::graph::*;
use crate::search::shortest_path::ShortestPath;
use crate::statistics::SearchStats;
use log::{debug, info, warn};

#[derive(Debug)]
pub(crate) struct Candidate {
    pub(crate) node_idx: NodeIndex,
    pub(crate) weight: Weight,
}

impl Candidate {
    pub(crate) fn new(node_idx: NodeIndex, weight: Weight) -> Self {
        Self { node_idx, weight }
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    // Reversed, the heap pops the smallest weight first and the lower index on ties
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| other.node_idx.cmp(&self.node_idx))
    }
}

/// Dijkstra's algorithm with a binary heap. Same costs as
/// [`Dijkstra`](super::dijkstra::Dijkstra), faster on larger maps.
pub struct HeapDijkstra<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
}

impl<'a> HeapDijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        HeapDijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    pub fn search(&mut self, source: NodeIndex, target: NodeIndex) -> Option<ShortestPath> {
        self.stats.init();

        if !self.g.contains(source) || !self.g.contains(target) {
            warn!(
                "Search from {} to {} on a graph with {} cities",
                source,
                target,
                self.g.num_cities()
            );
            self.stats.finish();
            return None;
        }

        let num_nodes = self.g.num_cities();
        let mut distances = vec![Weight::INFINITY; num_nodes];
        let mut previous: Vec<Option<NodeIndex>> = vec![None; num_nodes];
        let mut visited = vec![false; num_nodes];

        distances[source.index()] = 0.0;

        let mut queue = BinaryHeap::new();
        queue.push(Candidate::new(source, 0.0));

        while let Some(Candidate { weight, node_idx }) = queue.pop() {
            // Stale entry, the node was settled with a smaller weight
            if visited[node_idx.index()] {
                continue;
            }
            self.stats.nodes_settled += 1;

            if node_idx == target {
                break;
            }

            visited[node_idx.index()] = true;

            for neighbor in self.g.neighbors(node_idx) {
                let new_distance = weight + self.g.distance(node_idx, neighbor);
                if new_distance < distances[neighbor.index()] {
                    distances[neighbor.index()] = new_distance;
                    previous[neighbor.index()] = Some(node_idx);
                    self.stats.edges_relaxed += 1;
                    queue.push(Candidate::new(neighbor, new_distance));
                }
            }
        }
        self.stats.finish();

        let sp = super::reconstruct_path(source, target, &distances, &previous);
        if sp.is_some() {
            debug!("Path found: {:?}", sp);
            info!(
                "Path found: {:?}/{} nodes settled",
                self.stats.duration.unwrap_or_default(),
                self.stats.nodes_settled
            );
        } else {
            info!(
                "No path found: {:?}/{} nodes settled",
                self.stats.duration.unwrap_or_default(),
                self.stats.nodes_settled
            );
        }

        sp
    }
}
