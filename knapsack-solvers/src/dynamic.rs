use anyhow::{anyhow, Result};
use knapsack_core::{ProblemInstance, Selection, SolveOutcome};

fn alloc_table<T: Clone>(cells: usize, fill: T, what: &str) -> Result<Vec<T>> {
    let mut table = Vec::new();
    table
        .try_reserve_exact(cells)
        .map_err(|e| anyhow!("Failed to allocate {} ({} cells): {}", what, cells, e))?;
    table.resize(cells, fill);
    Ok(table)
}

/// Dynamic programming over a (N+1) x (C+1) table, O(n*C) time and space.
/// Exact optimum; serves as the correctness reference for the heuristics at
/// sizes where it stays tractable.
///
/// The value table holds f64, not integers: items carry fractional values
/// and a truncating table would break optimality. Both tables live in one
/// contiguous allocation each, indexed `i * (C + 1) + w`, and are dropped
/// when the solve returns.
pub fn solve_instance(instance: &ProblemInstance) -> Result<SolveOutcome> {
    let n = instance.num_items();
    let capacity = instance.capacity as usize;
    let width = capacity + 1;
    let cells = (n + 1)
        .checked_mul(width)
        .ok_or_else(|| anyhow!("DP table dimensions {}x{} overflow usize", n + 1, width))?;

    let mut values = alloc_table(cells, 0f64, "DP value table")?;
    let mut keep = alloc_table(cells, false, "DP decision table")?;

    for i in 1..=n {
        let item = &instance.items[i - 1];
        let item_weight = item.weight as usize;
        for w in 1..=capacity {
            let skip = values[(i - 1) * width + w];
            if item_weight <= w {
                let take = values[(i - 1) * width + (w - item_weight)] + item.value;
                if take > skip {
                    values[i * width + w] = take;
                    keep[i * width + w] = true;
                    continue;
                }
            }
            values[i * width + w] = skip;
        }
    }

    // Back-trace from (n, C): whenever the decision table says item i-1 was
    // taken, mark it and give back its weight.
    let mut selection = Selection::empty(n);
    let mut w = capacity;
    for i in (1..=n).rev() {
        if keep[i * width + w] {
            selection.taken[i - 1] = true;
            w -= instance.items[i - 1].weight as usize;
        }
    }

    let total_value = values[n * width + capacity];
    Ok(SolveOutcome {
        selection,
        total_value,
    })
}
