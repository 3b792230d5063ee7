//! Deterministic random number generation.
//!
//! RULE: Nothing in the generator may call any platform RNG.
//! All randomness flows through DatasetRng instances derived
//! from the single master seed in PipelineConfig.
//!
//! Each dataset gets its own RNG stream, seeded deterministically
//! from (master_seed XOR slot_index). This means:
//!   - Adding a new dataset never changes existing datasets' streams.
//!   - Each dataset's rows are fully reproducible in isolation.

use crate::error::{PipelineError, PipelineResult};
use rand::{distributions::WeightedIndex, prelude::Distribution, Rng, SeedableRng};
use rand_distr::{Normal, Poisson};
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single dataset.
pub struct DatasetRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl DatasetRng {
    /// Create a dataset RNG from the master seed and a stable
    /// slot index. The index must never change once assigned.
    pub fn new(master_seed: u64, slot_index: u64) -> Self {
        let derived_seed = master_seed ^ (slot_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Roll a u64 in [0, n). Panics if n is 0.
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        self.inner.gen_range(0..n)
    }

    /// Roll a float in [low, high).
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.inner.gen_range(low..high)
    }

    /// Roll an integer in [low, high). Mirrors a half-open `randint`.
    pub fn int_range(&mut self, low: i64, high: i64) -> i64 {
        self.inner.gen_range(low..high)
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.inner.gen_bool(p)
    }

    /// Uniform pick from a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.inner.gen_range(0..items.len())]
    }

    /// Weighted pick. Panics on an empty slice or weights that are
    /// negative or sum to zero; every caller passes a constant table.
    pub fn weighted<'a, T>(&mut self, items: &'a [(T, f64)]) -> &'a T {
        let index = WeightedIndex::new(items.iter().map(|(_, weight)| *weight))
            .unwrap_or_else(|e| panic!("{}: bad weight table: {e}", self.name));
        &items[index.sample(&mut self.inner)].0
    }

    pub fn normal(&mut self, mean: f64, std_dev: f64) -> PipelineResult<f64> {
        let dist = Normal::new(mean, std_dev).map_err(|e| {
            PipelineError::invalid(self.name, "std_dev", format!("N({mean}, {std_dev}): {e}"))
        })?;
        Ok(dist.sample(&mut self.inner))
    }

    pub fn poisson(&mut self, lambda: f64) -> PipelineResult<u64> {
        let dist = Poisson::new(lambda).map_err(|e| {
            PipelineError::invalid(self.name, "lambda", format!("Poisson({lambda}): {e}"))
        })?;
        let count: f64 = dist.sample(&mut self.inner);
        Ok(count as u64)
    }
}

/// All dataset RNGs for a single run, indexed by stable slot.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_dataset(&self, slot: DatasetSlot) -> DatasetRng {
        DatasetRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable dataset slot assignments.
/// NEVER reorder or remove entries; only append.
/// Reordering changes every dataset's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum DatasetSlot {
    Suppliers = 0,
    Inventory = 1,
    Demand = 2,
    Logistics = 3,
    Forecast = 4,
    // Add new datasets here, append only.
}

impl DatasetSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Suppliers => "suppliers",
            Self::Inventory => "inventory",
            Self::Demand => "demand",
            Self::Logistics => "logistics",
            Self::Forecast => "forecast",
        }
    }
}
