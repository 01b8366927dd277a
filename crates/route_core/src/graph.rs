use crate::constants::{Coord, Weight};
use crate::error::GraphError;
use crate::util::math::euclidean;
use city_reader::{names_match, CityMap};
use log::{debug, info, warn};
use std::{fmt, path::Path};

/// Default integer typer for node indices
pub type DefaultIdx = u32;

/// Node identifier. Equal to the position of the city in [`Graph::cities`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(DefaultIdx);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as DefaultIdx)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn end() -> Self {
        NodeIndex(DefaultIdx::MAX)
    }
}

impl From<usize> for NodeIndex {
    fn from(ix: usize) -> Self {
        NodeIndex::new(ix)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// A named point on the map
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: NodeIndex,
    pub name: String,
    pub x: Coord,
    pub y: Coord,
    neighbors: Vec<NodeIndex>,
}

impl City {
    fn new(id: NodeIndex, name: &str, x: Coord, y: Coord) -> Self {
        City {
            id,
            name: name.to_string(),
            x,
            y,
            neighbors: Vec::new(),
        }
    }

    pub fn neighbors(&self) -> &[NodeIndex] {
        &self.neighbors
    }

    /// Case-insensitive comparison with `name`
    pub fn has_name(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

/// Outcome of building a graph from a [`CityMap`]
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Connections that were dropped because a name did not resolve
    pub skipped: Vec<GraphError>,
    /// Names used by more than one city. Only the first one is reachable by name.
    pub duplicates: Vec<String>,
}

/// Undirected graph of cities. Owns every city, adjacency is stored as
/// indices into `cities`.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    cities: Vec<City>,
    num_edges: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            cities: Vec::new(),
            num_edges: 0,
        }
    }

    pub fn with_capacity(num_cities: usize) -> Self {
        Self {
            cities: Vec::with_capacity(num_cities),
            num_edges: 0,
        }
    }

    /// Adds a new city to the graph and returns its index. Names are not
    /// checked for uniqueness.
    ///
    /// **Panics** if the Graph is at the maximum number of nodes for its index
    /// type
    pub fn add_city(&mut self, name: &str, x: Coord, y: Coord) -> NodeIndex {
        let node_idx = NodeIndex::new(self.cities.len());

        assert!(
            NodeIndex::end() != node_idx,
            "Maximum number of nodes for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        self.cities.push(City::new(node_idx, name, x, y));

        node_idx
    }

    /// Connects `a` and `b` in both directions.
    ///
    /// Nothing happens if one of the indices does not belong to this graph, if
    /// `a == b` or if the edge already exists. Returns `true` if a new edge was
    /// added.
    pub fn connect(&mut self, a: NodeIndex, b: NodeIndex) -> bool {
        if a == b || !self.contains(a) || !self.contains(b) {
            return false;
        }

        // Symmetric, checking one side is enough
        if self.cities[a.index()].neighbors.contains(&b) {
            return false;
        }

        self.cities[a.index()].neighbors.push(b);
        self.cities[b.index()].neighbors.push(a);
        self.num_edges += 1;

        true
    }

    /// Resolves both names and connects the cities. `line` is only used for
    /// reporting.
    pub fn connect_by_name(&mut self, from: &str, to: &str, line: u64) -> Result<bool, GraphError> {
        let malformed = |name: &str| GraphError::MalformedEdgeReference {
            line,
            name: name.to_string(),
        };

        let a = self.find_by_name(from).ok_or_else(|| malformed(from))?;
        let b = self.find_by_name(to).ok_or_else(|| malformed(to))?;

        Ok(self.connect(a, b))
    }

    /// Case-insensitive lookup. Scans in index order, so the first loaded city
    /// wins if a name is used twice.
    pub fn find_by_name(&self, name: &str) -> Option<NodeIndex> {
        self.cities
            .iter()
            .find(|city| city.has_name(name))
            .map(|city| city.id)
    }

    pub fn try_find_by_name(&self, name: &str) -> Result<NodeIndex, GraphError> {
        self.find_by_name(name)
            .ok_or_else(|| GraphError::CityNotFound(name.to_string()))
    }

    pub fn contains(&self, node_idx: NodeIndex) -> bool {
        node_idx.index() < self.cities.len()
    }

    pub fn city(&self, node_idx: NodeIndex) -> Option<&City> {
        self.cities.get(node_idx.index())
    }

    /// Returns an iterator over all cities in index order
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    pub fn neighbors(&self, node_idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.city(node_idx)
            .map(|city| city.neighbors.as_slice())
            .unwrap_or_default()
            .iter()
            .copied()
    }

    pub fn num_cities(&self) -> usize {
        self.cities.len()
    }

    /// Number of undirected edges
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Straight line distance between two cities of this graph.
    ///
    /// **Panics** if one of the indices does not exist
    pub fn distance(&self, a: NodeIndex, b: NodeIndex) -> Weight {
        euclidean(&self.cities[a.index()], &self.cities[b.index()])
    }

    /// Builds a graph from raw file content. Connections that name an unknown
    /// city are skipped and listed in the returned report.
    pub fn from_city_map(map: &CityMap) -> (Self, LoadReport) {
        let mut report = LoadReport {
            duplicates: map.duplicate_names(),
            ..Default::default()
        };
        for name in &report.duplicates {
            warn!("City name {} is used more than once, only the first is reachable by name", name);
        }

        let mut g = Graph::with_capacity(map.get_cities().len());
        for city in map.get_cities() {
            g.add_city(&city.name, city.x, city.y);
        }

        for connection in map.get_connections() {
            match g.connect_by_name(&connection.from, &connection.to, connection.line) {
                Ok(true) => {}
                Ok(false) => debug!(
                    "Ignoring connection {} <=> {}: duplicate or self loop",
                    connection.from, connection.to
                ),
                Err(err) => {
                    warn!("{}", err);
                    report.skipped.push(err);
                }
            }
        }

        (g, report)
    }

    pub fn from_files(
        cities_path: &Path,
        connections_path: &Path,
    ) -> anyhow::Result<(Self, LoadReport)> {
        let map = CityMap::from_files(cities_path, connections_path)?;

        let now = std::time::Instant::now();
        info!("BEGIN building graph");
        let (g, report) = Graph::from_city_map(&map);
        info!("FINISHED building graph. Took {:?}", now.elapsed());
        info!(
            "Graph has {} cities and {} edges, {} connections skipped",
            g.num_cities(),
            g.num_edges(),
            report.skipped.len()
        );

        Ok((g, report))
    }

    /// Inverse of [`Graph::from_city_map`]. Every edge is emitted once, from
    /// the lower to the higher index.
    pub fn to_city_map(&self) -> CityMap {
        let mut map = CityMap::new();
        for city in self.cities() {
            map.add_city(&city.name, city.x, city.y);
        }
        for city in self.cities() {
            for neighbor in city.neighbors.iter().filter(|n| city.id < **n) {
                map.add_connection(&city.name, &self.cities[neighbor.index()].name);
            }
        }
        map
    }

    pub fn write_files(&self, cities_path: &Path, connections_path: &Path) -> anyhow::Result<()> {
        self.to_city_map().write_files(cities_path, connections_path)
    }
}

/// Macro to create a city on a graph with a given name and coordinates
///
/// city!(g, "A", 0, 0)
#[macro_export]
macro_rules! city {
    ($graph:expr, $name:expr, $x:expr, $y:expr) => {
        $graph.add_city($name, $x, $y)
    };
}

#[cfg(test)]
mod tests {
    use crate::util::test_graphs::{graph_test_data, test_data_dir};

    use super::*;

    #[test]
    fn indices_are_dense() {
        let mut g = Graph::new();
        let a = city!(g, "A", 0, 0);
        let b = city!(g, "B", 1, 1);
        let c = city!(g, "C", 2, 2);

        assert_eq!([a, b, c], [node_index(0), node_index(1), node_index(2)]);
        for (i, city) in g.cities().enumerate() {
            assert_eq!(city.id.index(), i);
        }
    }

    #[test]
    fn connect_is_symmetric() {
        let mut g = Graph::new();
        let a = city!(g, "A", 0, 0);
        let b = city!(g, "B", 3, 0);

        assert!(g.connect(a, b));

        assert_eq!(g.city(a).unwrap().neighbors(), &[b]);
        assert_eq!(g.city(b).unwrap().neighbors(), &[a]);
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn connect_is_idempotent() {
        let mut g = Graph::new();
        let a = city!(g, "A", 0, 0);
        let b = city!(g, "B", 3, 0);

        assert!(g.connect(a, b));
        assert!(!g.connect(b, a));
        assert!(!g.connect(a, b));

        assert_eq!(g.city(a).unwrap().neighbors().len(), 1);
        assert_eq!(g.city(b).unwrap().neighbors().len(), 1);
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn connect_ignores_self_loop_and_foreign_index() {
        let mut g = Graph::new();
        let a = city!(g, "A", 0, 0);

        assert!(!g.connect(a, a));
        assert!(!g.connect(a, node_index(7)));
        assert!(!g.connect(NodeIndex::end(), a));

        assert!(g.city(a).unwrap().neighbors().is_empty());
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn find_by_name_ignores_case() {
        let mut g = Graph::new();
        let a = city!(g, "Istanbul", 0, 0);
        let b = city!(g, "Ankara", 0, 0);

        assert_eq!(g.find_by_name("istanbul"), Some(a));
        assert_eq!(g.find_by_name("ANKARA"), Some(b));
        assert_eq!(g.find_by_name("Ankar"), None);
        assert_eq!(
            g.try_find_by_name("Izmir"),
            Err(GraphError::CityNotFound("Izmir".to_string()))
        );
    }

    #[test]
    fn find_by_name_turkish_letters() {
        let mut g = Graph::new();
        let istanbul = city!(g, "İstanbul", 570, 870);
        let igdir = city!(g, "Iğdır", 2300, 780);

        assert_eq!(g.find_by_name("istanbul"), Some(istanbul));
        assert_eq!(g.find_by_name("İSTANBUL"), Some(istanbul));
        assert_eq!(g.find_by_name("iğdir"), Some(igdir));
        assert_eq!(g.find_by_name("IĞDIR"), Some(igdir));
    }

    #[test]
    fn load_duplicates_agree_with_lookup() {
        let mut map = CityMap::new();
        map.add_city("ΟΔΟΣ", 0, 0);
        map.add_city("οδοσ", 1, 1);

        let (g, report) = Graph::from_city_map(&map);

        assert_eq!(g.find_by_name("οδοσ"), Some(node_index(0)));
        assert_eq!(report.duplicates, vec!["οδοσ".to_string()]);
    }

    #[test]
    fn find_by_name_prefers_first_duplicate() {
        let mut g = Graph::new();
        let first = city!(g, "Konya", 0, 0);
        let _second = city!(g, "KONYA", 5, 5);

        assert_eq!(g.num_cities(), 2);
        assert_eq!(g.find_by_name("konya"), Some(first));
    }

    #[test]
    fn neighbors_of_unknown_index_is_empty() {
        let g = Graph::new();
        assert_eq!(g.neighbors(node_index(3)).count(), 0);
    }

    #[test]
    fn load_skips_unknown_names() {
        let mut map = CityMap::new();
        map.add_city("A", 0, 0);
        map.add_city("B", 3, 0);
        map.add_connection("a", "b");
        map.add_connection("A", "Nowhere");
        map.add_connection("Nowhere", "B");
        map.add_connection("B", "A");
        map.add_connection("A", "A");

        let (g, report) = Graph::from_city_map(&map);

        assert_eq!(g.num_cities(), 2);
        assert_eq!(g.num_edges(), 1);
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(
            report.skipped[0],
            GraphError::MalformedEdgeReference {
                line: 0,
                name: "Nowhere".to_string()
            }
        );
        assert!(report.duplicates.is_empty());
    }

    #[test]
    fn load_reports_duplicate_names() {
        let mut map = CityMap::new();
        map.add_city("A", 0, 0);
        map.add_city("a", 1, 0);

        let (g, report) = Graph::from_city_map(&map);

        assert_eq!(g.num_cities(), 2);
        assert_eq!(report.duplicates, vec!["a".to_string()]);
    }

    #[test]
    fn read_test_data() {
        let dir = test_data_dir();
        let (g, report) = Graph::from_files(
            &dir.join("city_coordinates.txt"),
            &dir.join("city_connections.txt"),
        )
        .unwrap();

        assert_eq!(g.num_cities(), 12);
        assert_eq!(g.num_edges(), 13);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(
            report.skipped[0],
            GraphError::MalformedEdgeReference {
                line: 14,
                name: "Atlantis".to_string()
            }
        );
    }

    #[test]
    fn write_and_read_again() {
        let g = graph_test_data();

        let dir = std::env::temp_dir().join(format!("route_core_graph_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let cities = dir.join("cities.txt");
        let connections = dir.join("connections.txt");

        g.write_files(&cities, &connections).unwrap();
        let (read, report) = Graph::from_files(&cities, &connections).unwrap();

        assert!(report.skipped.is_empty());
        assert_eq!(read.num_cities(), g.num_cities());
        assert_eq!(read.num_edges(), g.num_edges());
        for (expected, actual) in g.cities().zip(read.cities()) {
            assert_eq!(expected.name, actual.name);
            assert_eq!((expected.x, expected.y), (actual.x, actual.y));

            let mut expected_neighbors = expected.neighbors().to_vec();
            let mut actual_neighbors = actual.neighbors().to_vec();
            expected_neighbors.sort();
            actual_neighbors.sort();
            assert_eq!(expected_neighbors, actual_neighbors);
        }

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
