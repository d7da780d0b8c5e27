use serde::{Deserialize, Serialize};

/// Ceiling on the n * capacity product above which dynamic programming is
/// judged infeasible. A time-budget heuristic, not a memory bound.
pub const DP_COMPLEXITY_CEILING: u64 = 400_000_000;

/// Largest item count for which 2^n enumeration (brute force, and the
/// backtracking worst case) is judged tractable. A conservative static
/// cutoff; it does not adapt to how well a particular instance prunes.
pub const EXHAUSTIVE_MAX_ITEMS: usize = 25;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct StrategyVerdict {
    pub feasible: bool,
    /// The complexity figure the verdict was based on (operation count
    /// estimate; `inf` when 2^n overflows f64).
    pub complexity: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct FeasibilityReport {
    pub greedy: StrategyVerdict,
    pub dynamic: StrategyVerdict,
    pub branch_and_bound: StrategyVerdict,
    pub brute_force: StrategyVerdict,
}

/// Pure go/no-go estimate per strategy. Advisory only: callers may still
/// invoke a strategy the report marks infeasible.
pub fn assess_feasibility(num_items: usize, capacity: u32) -> FeasibilityReport {
    let n = num_items as f64;
    let sort_cost = if num_items <= 1 { n } else { n * n.log2() };
    let dp_cost = num_items as u64 * capacity as u64;
    let enumeration_cost = n.exp2();

    let exhaustive = StrategyVerdict {
        feasible: num_items <= EXHAUSTIVE_MAX_ITEMS,
        complexity: enumeration_cost,
    };

    FeasibilityReport {
        greedy: StrategyVerdict {
            feasible: true,
            complexity: sort_cost,
        },
        dynamic: StrategyVerdict {
            feasible: dp_cost <= DP_COMPLEXITY_CEILING,
            complexity: dp_cost as f64,
        },
        branch_and_bound: exhaustive,
        brute_force: exhaustive,
    }
}
