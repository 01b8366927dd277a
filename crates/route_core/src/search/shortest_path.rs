use crate::{
    constants::Weight,
    graph::{City, Graph, NodeIndex},
};

#[derive(Debug, PartialEq, Clone)]
pub struct ShortestPath {
    pub nodes: Vec<NodeIndex>,
    pub weight: Weight,
}

impl ShortestPath {
    pub fn new(nodes: Vec<NodeIndex>, weight: Weight) -> Self {
        ShortestPath { nodes, weight }
    }

    /// Cities along the path, start first
    pub fn cities<'a>(&'a self, g: &'a Graph) -> impl Iterator<Item = &'a City> + 'a {
        self.nodes.iter().filter_map(|node_idx| g.city(*node_idx))
    }

    /// `Total Distance: 7.00. Path: A -> B -> C`
    pub fn describe(&self, g: &Graph) -> String {
        let names: Vec<&str> = self.cities(g).map(|city| city.name.as_str()).collect();
        format!(
            "Total Distance: {:.2}. Path: {}",
            self.weight,
            names.join(" -> ")
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{graph::node_index, util::test_graphs::generate_simple_graph};

    use super::*;

    #[test]
    fn describe_path() {
        let g = generate_simple_graph();
        let sp = ShortestPath::new(vec![node_index(0), node_index(1), node_index(2)], 7.0);

        assert_eq!(sp.describe(&g), "Total Distance: 7.00. Path: A -> B -> C");
    }

    #[test]
    fn describe_single_city() {
        let g = generate_simple_graph();
        let sp = ShortestPath::new(vec![node_index(1)], 0.0);

        assert_eq!(sp.describe(&g), "Total Distance: 0.00. Path: B");
    }
}
