use std::path::PathBuf;

use crate::{
    city,
    constants::Coord,
    graph::{node_index, Graph},
};

pub fn generate_complex_graph() -> Graph {
    let mut graph = Graph::new();

    let a = city!(graph, "A", 60, 20);
    let b = city!(graph, "B", 30, 30);
    let c = city!(graph, "C", 40, 60);
    let d = city!(graph, "D", 20, 70);
    let e = city!(graph, "E", 30, 100);
    let f = city!(graph, "F", 20, 130);
    let g = city!(graph, "G", 70, 150);
    let h = city!(graph, "H", 50, 120);
    let i = city!(graph, "I", 70, 110);
    let j = city!(graph, "J", 50, 90);
    let k = city!(graph, "K", 70, 70);

    graph.connect(a, b); // A <=> B
    graph.connect(a, c); // A <=> C
    graph.connect(a, k); // A <=> K

    graph.connect(b, d); // B <=> D
    graph.connect(b, c); // B <=> C

    graph.connect(c, d); // C <=> D
    graph.connect(c, j); // C <=> J

    graph.connect(d, j); // D <=> J
    graph.connect(d, e); // D <=> E

    graph.connect(e, j); // E <=> J
    graph.connect(e, f); // E <=> F

    graph.connect(f, h); // F <=> H
    graph.connect(f, g); // F <=> G

    graph.connect(g, h); // G <=> H
    graph.connect(g, i); // G <=> I

    graph.connect(h, i); // H <=> I
    graph.connect(h, j); // H <=> J

    graph.connect(i, j); // I <=> J
    graph.connect(i, k); // I <=> K

    graph.connect(j, k); // J <=> K

    graph
}

pub fn generate_simple_graph() -> Graph {
    //         C (3,4)
    //         |
    // A ----- B
    // (0,0)   (3,0)
    let mut g = Graph::new();

    let a = city!(g, "A", 0, 0);
    let b = city!(g, "B", 3, 0);
    let c = city!(g, "C", 3, 4);

    g.connect(a, b);
    g.connect(b, c);

    g
}

/// Builds a graph from coordinates and index pairs. Cities are named by their
/// index.
pub fn graph_from_parts(coords: &[(Coord, Coord)], edges: &[(usize, usize)]) -> Graph {
    let mut g = Graph::with_capacity(coords.len());
    for (i, (x, y)) in coords.iter().enumerate() {
        g.add_city(&i.to_string(), *x, *y);
    }
    for (a, b) in edges {
        g.connect(node_index(*a), node_index(*b));
    }
    g
}

pub fn test_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../city_reader/test_data")
}

pub fn graph_test_data() -> Graph {
    let dir = test_data_dir();

    let (g, _) = Graph::from_files(
        &dir.join("city_coordinates.txt"),
        &dir.join("city_connections.txt"),
    )
    .unwrap();
    g
}
