use anyhow::Context;
use route_core::{
    prelude::*,
    util::cli::{self, Engine},
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse();

    let (g, report) = Graph::from_files(&cfg.cities, &cfg.connections)?;
    for skipped in &report.skipped {
        eprintln!("{}", skipped);
    }

    let from = g
        .try_find_by_name(&cfg.from)
        .context("Invalid start city")?;
    let to = g
        .try_find_by_name(&cfg.to)
        .context("Invalid destination city")?;

    let (sp, stats) = match cfg.engine {
        Engine::LinearScan => {
            let mut dijkstra = Dijkstra::new(&g);
            (dijkstra.search(from, to), dijkstra.stats)
        }
        Engine::Heap => {
            let mut dijkstra = HeapDijkstra::new(&g);
            (dijkstra.search(from, to), dijkstra.stats)
        }
    };
    log::info!("{}", stats);

    match sp {
        Some(sp) => println!("{}", sp.describe(&g)),
        None => println!("No path could be found."),
    }

    Ok(())
}
