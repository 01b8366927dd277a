use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use route_core::{
    graph::{node_index, Graph},
    search::{dijkstra::Dijkstra, heap_dijkstra::HeapDijkstra},
};

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn gen_rand_graph(number_cities: usize, rng: &mut StdRng) -> Graph {
    // 2.5 edges per city on average
    let number_edges: usize = (number_cities as f32 * 2.5) as usize;

    let mut g = Graph::with_capacity(number_cities);

    for i in 0..number_cities {
        g.add_city(&i.to_string(), rng.gen_range(0..2400), rng.gen_range(0..1100));
    }

    for _ in 0..number_edges {
        let a = rng.gen_range(0..number_cities);
        let b = rng.gen_range(0..number_cities);
        g.connect(node_index(a), node_index(b));
    }

    g
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng: StdRng = rand::SeedableRng::seed_from_u64(187);

    let graphs: Vec<Graph> = [100, 1_000, 5_000]
        .iter()
        .map(|i| gen_rand_graph(*i, &mut rng))
        .collect();

    let mut group = c.benchmark_group("linear_scan_vs_heap");
    for graph in graphs {
        let src = node_index(rng.gen_range(0..graph.num_cities()));
        let dst = node_index(rng.gen_range(0..graph.num_cities()));

        group.bench_with_input(
            BenchmarkId::new("LinearScan", graph.num_cities()),
            &graph,
            |b, g| {
                let mut dijkstra = Dijkstra::new(g);
                b.iter(|| dijkstra.search(src, dst));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("BinaryHeap", graph.num_cities()),
            &graph,
            |b, g| {
                let mut dijkstra = HeapDijkstra::new(g);
                b.iter(|| dijkstra.search(src, dst));
            },
        );
    }
    group.finish();
}
