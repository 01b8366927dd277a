use crate::constants::Weight;
use crate::graph::NodeIndex;

use self::shortest_path::ShortestPath;

pub mod dijkstra;
pub mod heap_dijkstra;
pub mod shortest_path;

/// Follows the predecessor links from `target` back to `source`. Returns
/// `None` if `target` was never reached.
pub fn reconstruct_path(
    source: NodeIndex,
    target: NodeIndex,
    distances: &[Weight],
    previous: &[Option<NodeIndex>],
) -> Option<ShortestPath> {
    let weight = *distances.get(target.index())?;
    if weight.is_infinite() {
        return None;
    }

    let mut path = vec![target];
    let mut current = target;
    while let Some(prev_node) = previous[current.index()] {
        path.push(prev_node);
        current = prev_node;
    }
    path.reverse();

    debug_assert_eq!(path[0], source);
    Some(ShortestPath::new(path, weight))
}

#[cfg(test)]
pub(crate) fn assert_no_path(path: Option<ShortestPath>) {
    assert_eq!(None, path);
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_path: Vec<usize>,
    expected_weight: Weight,
    path: Option<ShortestPath>,
) {
    let path = path.expect("expected a path");
    assert_eq!(
        expected_path,
        path.nodes.iter().map(|n| n.index()).collect::<Vec<_>>()
    );
    approx::assert_abs_diff_eq!(expected_weight, path.weight, epsilon = 1e-9);
}

#[cfg(test)]
mod tests {
    use crate::graph::node_index;

    use super::*;

    #[test]
    fn reconstruct_unreached_target() {
        let distances = [0.0, Weight::INFINITY];
        let previous = [None, None];

        assert_no_path(reconstruct_path(
            node_index(0),
            node_index(1),
            &distances,
            &previous,
        ));
    }

    #[test]
    fn reconstruct_chain() {
        // 0 -> 2 -> 1
        let distances = [0.0, 3.0, 1.0];
        let previous = [None, Some(node_index(2)), Some(node_index(0))];

        assert_path(
            vec![0, 2, 1],
            3.0,
            reconstruct_path(node_index(0), node_index(1), &distances, &previous),
        );
    }
}
