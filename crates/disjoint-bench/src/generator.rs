//! Random union/find workload generator.
//!
//! Elements are the integers `0..num_elements`, so the same workload can
//! drive both the hashed [`disjoint_core::DisjointSet`] and the dense
//! [`disjoint_core::DenseDisjointSet`].

use disjoint_core::WeightedEdge;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration for the workload generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of elements.
    pub num_elements: usize,
    /// Number of union operations (also the number of weighted edges).
    pub num_unions: usize,
    /// Number of find operations.
    pub num_finds: usize,
    /// Edge weights are drawn from `1..=max_weight`.
    pub max_weight: u32,
    /// Fraction of unions that join an element to a close neighbour
    /// (0.0-1.0). Local unions build long chains before they meet.
    pub locality: f64,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 1k elements, 800 unions, 2k finds
    Small,
    /// 10k elements, 8k unions, 20k finds
    Medium,
    /// 100k elements, 80k unions, 200k finds
    Large,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let (num_elements, num_unions, num_finds) = match self {
            SizeTier::Small => (1_000, 800, 2_000),
            SizeTier::Medium => (10_000, 8_000, 20_000),
            SizeTier::Large => (100_000, 80_000, 200_000),
        };
        GeneratorConfig {
            seed,
            num_elements,
            num_unions,
            num_finds,
            max_weight: 1_000,
            locality: 0.5,
        }
    }

    /// Short label used in benchmark IDs.
    pub fn label(self) -> &'static str {
        match self {
            SizeTier::Small => "S",
            SizeTier::Medium => "M",
            SizeTier::Large => "L",
        }
    }
}

/// A generated sequence of operations over `0..num_elements`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    /// Number of elements.
    pub num_elements: usize,
    /// Pairs to union, in order.
    pub unions: Vec<(usize, usize)>,
    /// Elements to find, in order.
    pub finds: Vec<usize>,
    /// The union pairs with a random weight each.
    pub edges: Vec<WeightedEdge<usize, u32>>,
}

/// Generates a workload from `config`. The same config always yields the
/// same workload.
pub fn generate_workload(config: &GeneratorConfig) -> Workload {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let n = config.num_elements;
    if n == 0 {
        return Workload {
            num_elements: 0,
            unions: Vec::new(),
            finds: Vec::new(),
            edges: Vec::new(),
        };
    }

    let locality = config.locality.clamp(0.0, 1.0);
    let mut unions = Vec::with_capacity(config.num_unions);
    for _ in 0..config.num_unions {
        let a = rng.gen_range(0..n);
        let b = if rng.gen_bool(locality) {
            (a + rng.gen_range(1..=8)) % n
        } else {
            rng.gen_range(0..n)
        };
        unions.push((a, b));
    }

    let finds = (0..config.num_finds).map(|_| rng.gen_range(0..n)).collect();

    let max_weight = config.max_weight.max(1);
    let edges = unions
        .iter()
        .map(|&(a, b)| WeightedEdge::new(a, b, rng.gen_range(1..=max_weight)))
        .collect();

    Workload {
        num_elements: n,
        unions,
        finds,
        edges,
    }
}
