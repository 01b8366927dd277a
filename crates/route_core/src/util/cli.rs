use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// Name of the start city
    from: String,

    /// Name of the destination city
    to: String,

    /// Path to the city file, one `name, x, y` per line
    #[arg(long, value_name = "file", default_value = "city_coordinates.txt")]
    cities: PathBuf,

    /// Path to the connection file, one `nameA,nameB` per line
    #[arg(long, value_name = "file", default_value = "city_connections.txt")]
    connections: PathBuf,

    /// Search with a binary heap instead of a linear scan
    #[arg(long, default_value = "false")]
    heap: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    LinearScan,
    Heap,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub cities: PathBuf,
    pub connections: PathBuf,
    pub from: String,
    pub to: String,
    pub engine: Engine,
}

impl From<Cli> for Cfg {
    fn from(cli: Cli) -> Self {
        Cfg {
            cities: cli.cities,
            connections: cli.connections,
            from: cli.from,
            to: cli.to,
            engine: if cli.heap {
                Engine::Heap
            } else {
                Engine::LinearScan
            },
        }
    }
}

pub fn parse() -> Cfg {
    Cli::parse().into()
}
