use crate::constants::Weight;
use crate::graph::*;
use crate::search::shortest_path::ShortestPath;
use crate::statistics::SearchStats;
use log::{debug, info, warn};

/// Dijkstra's algorithm with a linear scan for the next node to settle.
///
/// Runs in O(V²), which is fine for a map of a few hundred cities. Ties between
/// equally distant nodes go to the lower index and relaxations only happen on
/// a strictly shorter distance, so the returned path is always the same for a
/// given graph.
pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Dijkstra {
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

        while let Some(node_idx) = nearest_unvisited(&distances, &visited) {
            self.stats.nodes_settled += 1;

            if node_idx == target {
                break;
            }

            visited[node_idx.index()] = true;

            for neighbor in self.g.neighbors(node_idx) {
                let new_distance =
                    distances[node_idx.index()] + self.g.distance(node_idx, neighbor);
                if new_distance < distances[neighbor.index()] {
                    distances[neighbor.index()] = new_distance;
                    previous[neighbor.index()] = Some(node_idx);
                    self.stats.edges_relaxed += 1;
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

/// Unvisited node with the smallest finite distance. The first one found wins
/// on ties.
fn nearest_unvisited(distances: &[Weight], visited: &[bool]) -> Option<NodeIndex> {
    let mut min_distance = Weight::INFINITY;
    let mut nearest = None;

    for (i, distance) in distances.iter().enumerate() {
        if !visited[i] && *distance < min_distance {
            min_distance = *distance;
            nearest = Some(node_index(i));
        }
    }

    nearest
}
