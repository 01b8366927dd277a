//! Crate to find the shortest route between two cities on a small map.
//!
//! # Basic usage
//! ```no_run
//! use route_core::prelude::*;
//! use std::path::Path;
//!
//! // Read cities and connections, connections to unknown cities are skipped
//! let (g, _report) = Graph::from_files(
//!     Path::new("city_coordinates.txt"),
//!     Path::new("city_connections.txt"),
//! )
//! .expect("Failed to read map");
//!
//! let from = g.try_find_by_name("istanbul").expect("Unknown city");
//! let to = g.try_find_by_name("ankara").expect("Unknown city");
//!
//! let mut dijkstra = Dijkstra::new(&g);
//! match dijkstra.search(from, to) {
//!     Some(sp) => println!("{}", sp.describe(&g)),
//!     None => println!("No path could be found."),
//! }
//!```
//! [`Graph`]: crate::graph::Graph
pub mod constants;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;
