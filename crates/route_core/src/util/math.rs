use crate::{constants::Weight, graph::City};

/// Straight line distance between two cities
pub fn euclidean(src: &City, dst: &City) -> Weight {
    let dx = f64::from(src.x) - f64::from(dst.x);
    let dy = f64::from(src.y) - f64::from(dst.y);
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use crate::graph::Graph;

    #[test]
    fn pythagorean_triple() {
        let mut g = Graph::new();
        let a = g.add_city("A", 0, 0);
        let b = g.add_city("B", 3, 4);
        let c = g.add_city("C", -3, -4);

        assert_eq!(g.distance(a, b), 5.0);
        assert_eq!(g.distance(b, a), 5.0);
        assert_eq!(g.distance(b, c), 10.0);
        assert_eq!(g.distance(a, a), 0.0);
    }
}
