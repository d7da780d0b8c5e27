use anyhow::Result;
use knapsack_core::{Item, ProblemInstance, Selection, SolveOutcome};

/// Solve-scoped search state. Everything the recursion reads or updates
/// lives here, so independent solves can never contaminate each other.
struct Search<'a> {
    items: &'a [Item],
    capacity: u64,
    current: Vec<bool>,
    best: Vec<bool>,
    best_value: f64,
}

impl Search<'_> {
    /// Fractional-relaxation upper bound for the subproblem starting at
    /// `index`: take whole items in density order while they fit, then a
    /// fractional share of the first item that does not. Never
    /// underestimates the best completion value.
    fn bound(&self, index: usize, current_weight: u64, current_value: f64) -> f64 {
        let mut bound = current_value;
        let mut remaining = self.capacity - current_weight;
        let mut i = index;

        while i < self.items.len() && self.items[i].weight as u64 <= remaining {
            remaining -= self.items[i].weight as u64;
            bound += self.items[i].value;
            i += 1;
        }
        if i < self.items.len() {
            bound += remaining as f64 * self.items[i].density;
        }
        bound
    }

    fn explore(&mut self, index: usize, current_weight: u64, current_value: f64) {
        if index == self.items.len() {
            if current_value > self.best_value {
                self.best_value = current_value;
                self.best.copy_from_slice(&self.current);
            }
            return;
        }

        if self.bound(index, current_weight, current_value) <= self.best_value {
            return;
        }

        let item = &self.items[index];
        // Include branch first; gated by the hard weight check, independent
        // of the bound.
        if current_weight + item.weight as u64 <= self.capacity {
            self.current[index] = true;
            self.explore(
                index + 1,
                current_weight + item.weight as u64,
                current_value + item.value,
            );
        }
        self.current[index] = false;
        self.explore(index + 1, current_weight, current_value);
    }
}

/// Branch-and-bound depth-first search over take/skip decisions, items in
/// density order so the bound consumes the densest remaining capacity
/// first. Exact optimum; exponential worst case, intended for n <= 25 (the
/// advisor's cutoff -- not enforced here).
pub fn solve_instance(instance: &ProblemInstance) -> Result<SolveOutcome> {
    let sorted = instance.items_by_density();
    let n = sorted.len();

    let mut search = Search {
        items: &sorted,
        capacity: instance.capacity as u64,
        current: vec![false; n],
        best: vec![false; n],
        best_value: 0.0,
    };
    search.explore(0, 0, 0.0);

    // Remap from sorted positions back to original item ids.
    let mut selection = Selection::empty(instance.num_items());
    for (pos, &taken) in search.best.iter().enumerate() {
        if taken {
            selection.taken[sorted[pos].id] = true;
        }
    }

    Ok(SolveOutcome {
        selection,
        total_value: search.best_value,
    })
}
