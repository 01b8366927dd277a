//! Interactive prompt to query routes on a loaded map
use std::path::{Path, PathBuf};

use reedline_repl_rs::clap::{Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};
use route_core::{
    prelude::*,
    statistics::{average_degree, degree_hist},
};

const CITY_COORDINATES_FILE: &str = "city_coordinates.txt";
const CITY_CONNECTIONS_FILE: &str = "city_connections.txt";

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let g = &context.graph;
    let mut res = format!(
        "Graph has {} cities and {} edges, average degree {:.2}",
        g.num_cities(),
        g.num_edges(),
        average_degree(g)
    );

    match degree_hist(g) {
        Ok(hist) => {
            for bucket in hist.into_iter().filter(|b| b.count() > 0) {
                res.push_str(&format!(
                    "\n[{}-{}]: {}",
                    bucket.low(),
                    bucket.high(),
                    bucket.count()
                ));
            }
        }
        Err(err) => log::warn!("Could not build degree histogram: {}", err),
    }

    Ok(Some(res))
}

fn list_cities(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let lines: Vec<String> = context
        .graph
        .cities()
        .map(|city| format!("{}: {} ({}, {})", city.id, city.name, city.x, city.y))
        .collect();
    Ok(Some(lines.join("\n")))
}

fn neighbors(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let g = &context.graph;
    let city = match resolve(&args, g, "city") {
        Ok(city) => city,
        Err(msg) => return Ok(Some(msg)),
    };

    let lines: Vec<String> = g
        .neighbors(city)
        .filter_map(|n| g.city(n).map(|c| format!("{} ({:.2})", c.name, g.distance(city, n))))
        .collect();

    if lines.is_empty() {
        Ok(Some("No connections".to_string()))
    } else {
        Ok(Some(lines.join("\n")))
    }
}

fn run_dijkstra(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let g = &context.graph;
    let (src, dst) = match resolve_route(&args, g) {
        Ok(pair) => pair,
        Err(msg) => return Ok(Some(msg)),
    };

    let mut dijkstra = Dijkstra::new(g);
    let sp = dijkstra.search(src, dst);

    if let Some(sp) = sp {
        Ok(Some(format!(
            "{}\nTook: {:?}",
            sp.describe(g),
            dijkstra.stats.duration.unwrap_or_default()
        )))
    } else {
        Ok(Some("No path could be found.".to_string()))
    }
}

/// Runs both search variants on the same query
fn compare(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let g = &context.graph;
    let (src, dst) = match resolve_route(&args, g) {
        Ok(pair) => pair,
        Err(msg) => return Ok(Some(msg)),
    };

    let mut dijkstra = Dijkstra::new(g);
    let sp = dijkstra.search(src, dst);
    let mut heap = HeapDijkstra::new(g);
    let sp_heap = heap.search(src, dst);

    let describe = |sp: Option<ShortestPath>| match sp {
        Some(sp) => sp.describe(g),
        None => "No path could be found.".to_string(),
    };

    Ok(Some(format!(
        "Linear scan: {}\n  {}\nBinary heap: {}\n  {}",
        describe(sp),
        dijkstra.stats,
        describe(sp_heap),
        heap.stats
    )))
}

/// Looks up the city named by argument `arg`. The error is the message shown
/// to the user.
fn resolve(args: &ArgMatches, g: &Graph, arg: &str) -> std::result::Result<NodeIndex, String> {
    let name = args
        .get_one::<String>(arg)
        .ok_or_else(|| format!("Missing argument {}", arg))?;
    if name.is_empty() {
        return Err("City name cannot be empty. Please enter a valid city name.".to_string());
    }
    g.try_find_by_name(name)
        .map_err(|_| format!("City named '{}' not found. Please enter a valid city name.", name))
}

fn resolve_route(
    args: &ArgMatches,
    g: &Graph,
) -> std::result::Result<(NodeIndex, NodeIndex), String> {
    Ok((resolve(args, g, "src")?, resolve(args, g, "dst")?))
}

struct Context {
    graph: Graph,
}

impl Context {
    fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

fn city_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).required(true).help(help)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Init Graph
    let cities = std::env::args()
        .nth(1)
        .unwrap_or_else(|| CITY_COORDINATES_FILE.to_string());
    let connections = std::env::args()
        .nth(2)
        .unwrap_or_else(|| CITY_CONNECTIONS_FILE.to_string());

    let (graph, report) = Graph::from_files(Path::new(&cities), Path::new(&connections))?;
    for skipped in &report.skipped {
        println!("{}", skipped);
    }
    let context = Context::new(graph);

    let mut repl = Repl::new(context)
        .with_name("Route finder")
        .with_version("v0.1.0")
        .with_description("Find the shortest route between two cities")
        .with_banner("Welcome to the route finder")
        .with_history(PathBuf::from(".route_history"), 100)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(Command::new("cities").about("List all cities"), list_cities)
        .with_command(
            Command::new("neighbors")
                .arg(city_arg("city", "Name of the city"))
                .about("List the direct connections of a city"),
            neighbors,
        )
        .with_command(
            Command::new("route")
                .arg(city_arg("src", "Name of the start city"))
                .arg(city_arg("dst", "Name of the destination city"))
                .about("Calculate shortest path using Dijkstra's algorithm"),
            run_dijkstra,
        )
        .with_command(
            Command::new("compare")
                .arg(city_arg("src", "Name of the start city"))
                .arg(city_arg("dst", "Name of the destination city"))
                .about("Run the linear scan and the binary heap search side by side"),
            compare,
        );

    repl.run().map_err(|e| anyhow::anyhow!("{:?}", e))
}
