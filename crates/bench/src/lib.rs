use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 300;
const LARGE_RUNTIME_MEASURE_MS: u64 = 800;
const RNG_SEED: u64 = 0x5EED_2026;
const SAWTOOTH_RUN_LEN: usize = 64;
const FEW_DISTINCT_KEYS: u64 = 8;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Input shapes for sort benchmarks and tests.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Distribution {
    RandomUniform,
    NearlySorted1pctSwaps,
    /// Ascending except for one swapped adjacent pair.
    AdjacentSwap,
    /// Ascending blocks of `SAWTOOTH_RUN_LEN`, each starting below the last.
    Sawtooth,
    Descending,
    FewDistinct,
}

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
            Self::AdjacentSwap => "adjacent_swap",
            Self::Sawtooth => "sawtooth",
            Self::Descending => "descending",
            Self::FewDistinct => "few_distinct",
        }
    }
}

pub const DISTRIBUTIONS: [Distribution; 6] = [
    Distribution::RandomUniform,
    Distribution::NearlySorted1pctSwaps,
    Distribution::AdjacentSwap,
    Distribution::Sawtooth,
    Distribution::Descending,
    Distribution::FewDistinct,
];

pub fn generate<R: Rng>(dist: Distribution, size: usize, rng: &mut R) -> Vec<u64> {
    match dist {
        Distribution::RandomUniform => (0..size).map(|_| rng.random::<u64>()).collect(),
        Distribution::NearlySorted1pctSwaps => {
            let mut data: Vec<u64> = (0..size as u64).collect();
            if size > 0 {
                let swaps = (size / 100).max(1);
                for _ in 0..swaps {
                    let a = rng.random_range(0..size);
                    let b = rng.random_range(0..size);
                    data.swap(a, b);
                }
            }
            data
        }
        Distribution::AdjacentSwap => {
            let mut data: Vec<u64> = (0..size as u64).collect();
            if size >= 2 {
                let at = rng.random_range(0..size - 1);
                data.swap(at, at + 1);
            }
            data
        }
        Distribution::Sawtooth => (0..size)
            .map(|i| {
                let block = size / SAWTOOTH_RUN_LEN - i / SAWTOOTH_RUN_LEN;
                (block * SAWTOOTH_RUN_LEN + i % SAWTOOTH_RUN_LEN) as u64
            })
            .collect(),
        Distribution::Descending => (0..size as u64).rev().collect(),
        Distribution::FewDistinct => (0..size)
            .map(|_| rng.random_range(0..FEW_DISTINCT_KEYS))
            .collect(),
    }
}

#[inline]
pub fn seed_for(dist: Distribution, size: usize, salt: u64) -> u64 {
    mix_seed(RNG_SEED ^ ((dist as u64) << 48) ^ (size as u64) ^ salt)
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
