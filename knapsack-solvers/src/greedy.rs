use anyhow::Result;
use knapsack_core::{ProblemInstance, Selection, SolveOutcome};

/// Greedy by value density, O(n log n). Walks the whole density-sorted
/// catalog: an item that would overflow the remaining capacity is skipped,
/// and smaller items later in the scan may still be taken. Feasible but
/// not necessarily optimal for the 0/1 variant.
pub fn solve_instance(instance: &ProblemInstance) -> Result<SolveOutcome> {
    let capacity = instance.capacity as u64;
    let mut selection = Selection::empty(instance.num_items());
    let mut total_weight = 0u64;
    let mut total_value = 0f64;

    for item in instance.items_by_density() {
        if total_weight + item.weight as u64 <= capacity {
            selection.taken[item.id] = true;
            total_weight += item.weight as u64;
            total_value += item.value;
        }
    }

    Ok(SolveOutcome {
        selection,
        total_value,
    })
}
