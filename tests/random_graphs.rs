#[macro_use]
extern crate quickcheck;

use quickcheck::{Arbitrary, Gen};
use spanning_forest::{build, Graph, Mode, Outcome, SpanningForest, UnionFind};

// The most vertices a generated graph may have.
const MAX_VERTICES: u32 = 7;

// The most edges a generated graph may have. Brute force enumerates
// every subset, so keep this small.
const MAX_EDGES: u32 = 10;

// Weights are drawn from -WEIGHT_RANGE ..= WEIGHT_RANGE so ties are common.
const WEIGHT_RANGE: i32 = 5;

quickcheck! {
    fn prop_forest_size_is_vertices_minus_components(g: SmallGraph) -> bool {
        let graph = g.graph();
        modes().iter().all(|&mode| {
            let forest = build(&graph, mode).unwrap();
            forest.len() == g.vertices - graph.component_count()
        })
    }

    fn prop_result_is_acyclic(g: SmallGraph) -> bool {
        let graph = g.graph();
        modes().iter().all(|&mode| {
            let forest = build(&graph, mode).unwrap();
            let mut uf = UnionFind::new(g.vertices);
            let acyclic = forest.pairs().all(|(&a, &b)| uf.union(a, b));
            acyclic
        })
    }

    fn prop_minimum_is_optimal(g: SmallGraph) -> bool {
        let forest = build(&g.graph(), Mode::Minimum).unwrap();
        Some(forest.total_weight()) == g.spanning_forest_weights().into_iter().min()
    }

    fn prop_maximum_is_optimal(g: SmallGraph) -> bool {
        let forest = build(&g.graph(), Mode::Maximum).unwrap();
        Some(forest.total_weight()) == g.spanning_forest_weights().into_iter().max()
    }

    fn prop_build_is_deterministic(g: SmallGraph) -> bool {
        let graph = g.graph();
        modes().iter().all(|&mode| {
            build(&graph, mode).unwrap() == build(&graph, mode).unwrap()
        })
    }

    fn prop_steps_account_for_every_edge(g: SmallGraph) -> bool {
        let graph = g.graph();
        modes().iter().all(|&mode| {
            let forest = build(&graph, mode).unwrap();
            let sum = forest.edges().iter().map(|e| e.weight).sum::<i32>();
            let consistent = forest.steps().len() == g.edges.len() &&
                accepted(&forest) == forest.edges().to_vec() &&
                sum == forest.total_weight();
            consistent
        })
    }
}

fn modes() -> [Mode; 2] {
    [Mode::Minimum, Mode::Maximum]
}

fn accepted(forest: &SpanningForest<usize, i32>)
            -> Vec<spanning_forest::Edge<usize, i32>> {
    forest.steps().iter()
        .filter(|step| step.outcome == Outcome::Accepted)
        .map(|step| step.edge)
        .collect()
}

// No self-loops and no pair listed twice, in either direction.
fn is_simple(edges: &[(usize, usize, i32)]) -> bool {
    edges.iter().enumerate().all(|(i, &(a, b, _))| {
        a != b && edges[.. i].iter().all(|&(x, y, _)| {
            (x, y) != (a, b) && (x, y) != (b, a)
        })
    })
}

// A small graph on vertices `0 .. vertices` with distinct undirected edges
// and no self-loops.
#[derive(Clone, Debug)]
struct SmallGraph {
    vertices: usize,
    edges:    Vec<(usize, usize, i32)>,
}

impl SmallGraph {
    fn graph(&self) -> Graph<usize, i32> {
        let mut graph = Graph::with_vertices(0 .. self.vertices);
        for &(a, b, weight) in &self.edges {
            graph.add_edge(a, b, weight).unwrap();
        }
        graph
    }

    // The total weight of every spanning forest, i.e., every acyclic edge
    // subset with as many edges as a spanning forest has.
    fn spanning_forest_weights(&self) -> Vec<i32> {
        let size = self.vertices - self.graph().component_count();
        let mut result = Vec::new();

        for mask in 0u32 .. 1 << self.edges.len() {
            if mask.count_ones() as usize != size { continue; }

            let mut uf = UnionFind::new(self.vertices);
            let mut weight = 0;
            let mut acyclic = true;

            for (i, &(a, b, w)) in self.edges.iter().enumerate() {
                if mask & (1 << i) == 0 { continue; }
                acyclic &= uf.union(a, b);
                weight += w;
            }

            if acyclic {
                result.push(weight);
            }
        }

        result
    }
}

impl Arbitrary for SmallGraph {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        let vertices = (g.next_u32() % (MAX_VERTICES + 1)) as usize;
        let mut edges: Vec<(usize, usize, i32)> = Vec::new();

        if vertices >= 2 {
            let attempts = g.next_u32() % (MAX_EDGES + 1);
            for _ in 0 .. attempts {
                let a = g.next_u32() as usize % vertices;
                let b = g.next_u32() as usize % vertices;
                let weight = (g.next_u32() % (2 * WEIGHT_RANGE as u32 + 1)) as i32
                             - WEIGHT_RANGE;
                let duplicate = edges.iter().any(|&(x, y, _)| {
                    (x, y) == (a, b) || (x, y) == (b, a)
                });
                if a != b && !duplicate {
                    edges.push((a, b, weight));
                }
            }
        }

        SmallGraph {
            vertices: vertices,
            edges:    edges,
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> {
        let vertices = self.vertices;
        Box::new(self.edges.shrink()
            .filter(|edges| is_simple(edges))
            .map(move |edges| SmallGraph {
                vertices: vertices,
                edges:    edges,
            }))
    }
}
