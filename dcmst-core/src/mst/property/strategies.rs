//! Graph generators for MST property-based tests.
//!
//! Every generator draws integral weights stored as `f64`, so totals are
//! exact and can be compared without a tolerance. Vertex counts stay small
//! because the adjacency matrix is dense.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::Edge;

use super::types::{MstFixture, WeightDistribution};

const MIN_VERTICES: usize = 2;
const MAX_VERTICES: usize = 24;
const DENSE_MAX_VERTICES: usize = 14;
const MAX_WEIGHT: u32 = 100;

/// Generates MST fixtures covering every distribution.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture paired with a degree cap between one and four.
pub(super) fn capped_fixture_strategy() -> impl Strategy<Value = (MstFixture, usize)> {
    (mst_fixture_strategy(), 1_usize..=4)
}

/// Generates a fixture for a specific distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => generate_unique_weights(rng),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_dense(rng),
        WeightDistribution::HubHeavy => generate_hub_heavy(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

fn random_weight(rng: &mut SmallRng) -> f64 {
    f64::from(rng.gen_range(0..=MAX_WEIGHT))
}

/// Accumulates a simple graph: self-loops and repeated pairs are dropped.
///
/// Prim reads the matrix, where a later parallel edge overwrites an earlier
/// one, while Kruskal reads the list; simple graphs keep both views equal.
#[derive(Default)]
struct EdgeBuilder {
    edges: Vec<Edge>,
    seen: HashSet<(usize, usize)>,
}

impl EdgeBuilder {
    fn push(&mut self, left: usize, right: usize, weight: f64) {
        if left != right && self.seen.insert((left.min(right), left.max(right))) {
            self.edges.push(Edge::new(left, right, weight));
        }
    }

    /// Adds each unordered pair of `vertices` with probability
    /// `edge_probability`.
    fn random_pairs(
        &mut self,
        vertices: &[usize],
        edge_probability: f64,
        rng: &mut SmallRng,
        mut weight: impl FnMut(&mut SmallRng) -> f64,
    ) {
        for (offset, &left) in vertices.iter().enumerate() {
            for &right in &vertices[offset + 1..] {
                if rng.gen_bool(edge_probability) {
                    let weight = weight(rng);
                    self.push(left, right, weight);
                }
            }
        }
    }

    /// Threads a random path through `vertices` so they form one component.
    fn spanning_path(
        &mut self,
        vertices: &[usize],
        rng: &mut SmallRng,
        mut weight: impl FnMut(&mut SmallRng) -> f64,
    ) {
        let mut order = vertices.to_vec();
        order.shuffle(rng);
        for pair in order.windows(2) {
            let weight = weight(rng);
            self.push(pair[0], pair[1], weight);
        }
    }

    fn finish(self, vertex_count: usize, distribution: WeightDistribution) -> MstFixture {
        MstFixture {
            vertex_count,
            edges: self.edges,
            distribution,
        }
    }
}

fn generate_unique_weights(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let vertices: Vec<usize> = (0..vertex_count).collect();
    let edge_probability = rng.gen_range(0.2..=0.6);
    let mut builder = EdgeBuilder::default();
    builder.random_pairs(&vertices, edge_probability, rng, |_| 0.0);
    builder.spanning_path(&vertices, rng, |_| 0.0);

    let mut weights: Vec<u32> = (0..).take(builder.edges.len()).collect();
    weights.shuffle(rng);
    for (edge, weight) in builder.edges.iter_mut().zip(weights) {
        *edge = Edge::new(edge.source(), edge.target(), f64::from(weight));
    }
    builder.finish(vertex_count, WeightDistribution::Unique)
}

fn generate_identical_weights(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let vertices: Vec<usize> = (0..vertex_count).collect();
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<f64> = (0..pool_size)
        .map(|_| f64::from(rng.gen_range(1_u8..=10)))
        .collect();
    let pick = |r: &mut SmallRng| pool[r.gen_range(0..pool.len())];

    let edge_probability = rng.gen_range(0.3..=0.7);
    let mut builder = EdgeBuilder::default();
    builder.random_pairs(&vertices, edge_probability, rng, pick);
    builder.spanning_path(&vertices, rng, pick);
    builder.finish(vertex_count, WeightDistribution::ManyIdentical)
}

fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let vertices: Vec<usize> = (0..vertex_count).collect();
    let mut builder = EdgeBuilder::default();
    builder.spanning_path(&vertices, rng, random_weight);

    let extra = rng.gen_range(0..=vertex_count);
    for _ in 0..extra {
        let left = rng.gen_range(0..vertex_count);
        let right = rng.gen_range(0..vertex_count);
        let weight = random_weight(rng);
        builder.push(left, right, weight);
    }
    builder.finish(vertex_count, WeightDistribution::Sparse)
}

fn generate_dense(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
    let vertices: Vec<usize> = (0..vertex_count).collect();
    let edge_probability = rng.gen_range(0.7..=0.95);
    let mut builder = EdgeBuilder::default();
    builder.random_pairs(&vertices, edge_probability, rng, random_weight);
    builder.spanning_path(&vertices, rng, random_weight);
    builder.finish(vertex_count, WeightDistribution::Dense)
}

/// Cheap spokes from one to three hubs plus a costly rim through every
/// vertex, so small caps force the rim edges in.
fn generate_hub_heavy(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(4..=MAX_VERTICES);
    let hub_count = rng.gen_range(1..=3);
    let mut builder = EdgeBuilder::default();

    for hub in 0..hub_count {
        for spoke in hub_count..vertex_count {
            let weight = f64::from(rng.gen_range(1_u8..=5));
            builder.push(hub, spoke, weight);
        }
    }
    for vertex in 0..vertex_count {
        let weight = f64::from(rng.gen_range(50..=MAX_WEIGHT));
        builder.push(vertex, (vertex + 1) % vertex_count, weight);
    }
    builder.finish(vertex_count, WeightDistribution::HubHeavy)
}

fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let component_count = rng.gen_range(2..=4);
    let mut builder = EdgeBuilder::default();
    let mut offset = 0;

    for _ in 0..component_count {
        let size = rng.gen_range(1..=6);
        let vertices: Vec<usize> = (offset..offset + size).collect();
        let edge_probability = rng.gen_range(0.3..=0.8);
        builder.random_pairs(&vertices, edge_probability, rng, random_weight);
        builder.spanning_path(&vertices, rng, random_weight);
        offset += size;
    }
    builder.finish(offset, WeightDistribution::Disconnected)
}

impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            3 => Just(Self::HubHeavy),
            2 => Just(Self::Disconnected),
        ]
    }
}
