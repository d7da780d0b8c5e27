use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A single item of the problem instance. `id` is the item's position in
/// the original, unsorted catalog; sorted copies keep it so selections can
/// be remapped back to original order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Item {
    pub id: usize,
    pub weight: u32,
    pub value: f64,
    pub density: f64,
}

impl Item {
    pub fn new(id: usize, weight: u32, value: f64) -> Result<Self> {
        if weight == 0 {
            return Err(anyhow!("Item {} has zero weight", id));
        }
        if !value.is_finite() || value < 0.0 {
            return Err(anyhow!("Item {} has invalid value ({})", id, value));
        }
        Ok(Self {
            id,
            weight,
            value,
            density: value / weight as f64,
        })
    }
}

/// Orders by descending density, ties broken by ascending id so the order
/// is deterministic regardless of sort stability.
pub fn density_descending(a: &Item, b: &Item) -> Ordering {
    b.density
        .total_cmp(&a.density)
        .then_with(|| a.id.cmp(&b.id))
}

/// Parameters for random instance generation. Defaults match the classic
/// exercise setup: weights uniform in [1, 100], values uniform in
/// [100.00, 1000.00] with two decimal places.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GenerationParams {
    pub num_items: usize,
    pub capacity: u32,
    pub min_weight: u32,
    pub max_weight: u32,
    pub min_value_cents: u32,
    pub max_value_cents: u32,
}

impl GenerationParams {
    pub fn new(num_items: usize, capacity: u32) -> Self {
        Self {
            num_items,
            capacity,
            min_weight: 1,
            max_weight: 100,
            min_value_cents: 10_000,
            max_value_cents: 100_000,
        }
    }
}

/// An immutable 0/1 knapsack instance. Invariant: `items[i].id == i`, so a
/// `Selection` indexed by id is also indexed by position.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProblemInstance {
    pub items: Vec<Item>,
    pub capacity: u32,
}

impl ProblemInstance {
    pub fn from_parts(weights: Vec<u32>, values: Vec<f64>, capacity: u32) -> Result<Self> {
        if weights.len() != values.len() {
            return Err(anyhow!(
                "Mismatched lengths: {} weights vs {} values",
                weights.len(),
                values.len()
            ));
        }
        let items = weights
            .into_iter()
            .zip(values)
            .enumerate()
            .map(|(id, (weight, value))| Item::new(id, weight, value))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { items, capacity })
    }

    pub fn generate_instance(seed: &[u8; 32], params: &GenerationParams) -> Result<Self> {
        if params.min_weight == 0 {
            return Err(anyhow!("Minimum weight must be at least 1"));
        }
        if params.min_weight > params.max_weight {
            return Err(anyhow!(
                "Invalid weight range [{}, {}]",
                params.min_weight,
                params.max_weight
            ));
        }
        if params.min_value_cents > params.max_value_cents {
            return Err(anyhow!(
                "Invalid value range [{}, {}]",
                params.min_value_cents,
                params.max_value_cents
            ));
        }

        let mut rng = SmallRng::from_seed(seed.clone());
        let items = (0..params.num_items)
            .map(|id| {
                let weight = rng.gen_range(params.min_weight..=params.max_weight);
                let cents = rng.gen_range(params.min_value_cents..=params.max_value_cents);
                Item::new(id, weight, cents as f64 / 100.0)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            items,
            capacity: params.capacity,
        })
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// A copy of the catalog sorted by descending density. The greedy and
    /// branch-and-bound solvers both consume this ordering.
    pub fn items_by_density(&self) -> Vec<Item> {
        let mut sorted = self.items.clone();
        sorted.sort_unstable_by(density_descending);
        sorted
    }
}
