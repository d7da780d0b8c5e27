use anyhow::{anyhow, Result};
use knapsack_core::{ProblemInstance, Selection, SolveOutcome};

/// Exhaustive bitmask enumeration, O(2^n). The ground-truth oracle for the
/// other solvers on small instances; the advisor caps it at n <= 25 but the
/// algorithm itself only rejects masks that cannot be represented.
pub fn solve_instance(instance: &ProblemInstance) -> Result<SolveOutcome> {
    let n = instance.num_items();
    if n >= 64 {
        return Err(anyhow!(
            "{} items require 2^{} subsets, beyond the u64 mask range",
            n,
            n
        ));
    }

    let capacity = instance.capacity as u64;
    let mut best_mask = 0u64;
    let mut best_value = 0f64;

    for mask in 0..(1u64 << n) {
        let mut weight = 0u64;
        let mut value = 0f64;
        for (j, item) in instance.items.iter().enumerate() {
            if (mask >> j) & 1 == 1 {
                weight += item.weight as u64;
                value += item.value;
            }
        }
        if weight <= capacity && value > best_value {
            best_value = value;
            best_mask = mask;
        }
    }

    let mut selection = Selection::empty(n);
    for j in 0..n {
        if (best_mask >> j) & 1 == 1 {
            selection.taken[j] = true;
        }
    }

    Ok(SolveOutcome {
        selection,
        total_value: best_value,
    })
}
