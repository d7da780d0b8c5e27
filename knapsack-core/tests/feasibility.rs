use knapsack_core::{assess_feasibility, DP_COMPLEXITY_CEILING, EXHAUSTIVE_MAX_ITEMS};

#[test]
fn test_greedy_is_always_feasible() {
    assert!(assess_feasibility(0, 0).greedy.feasible);
    assert!(assess_feasibility(320_000, 1_000_000).greedy.feasible);
}

#[test]
fn test_dp_threshold_is_exact() {
    // 400_000 * 1_000 == 4e8, exactly at the ceiling.
    let at = assess_feasibility(400_000, 1_000);
    assert!(at.dynamic.feasible);
    assert_eq!(at.dynamic.complexity, DP_COMPLEXITY_CEILING as f64);

    let above = assess_feasibility(400_001, 1_000);
    assert!(!above.dynamic.feasible);
}

#[test]
fn test_exhaustive_threshold_is_exact() {
    let at = assess_feasibility(EXHAUSTIVE_MAX_ITEMS, 10_000);
    assert!(at.brute_force.feasible);
    assert!(at.branch_and_bound.feasible);
    assert_eq!(at.brute_force.complexity, (1u64 << 25) as f64);

    let above = assess_feasibility(EXHAUSTIVE_MAX_ITEMS + 1, 10_000);
    assert!(!above.brute_force.feasible);
    assert!(!above.branch_and_bound.feasible);
}

#[test]
fn test_verdicts_are_pure() {
    let a = assess_feasibility(1_000, 100_000);
    let b = assess_feasibility(1_000, 100_000);
    assert_eq!(a, b);
}

#[test]
fn test_large_n_complexity_does_not_panic() {
    // 2^n overflows f64 range around n = 1024; the figure saturates to inf.
    let report = assess_feasibility(320_000, 1_000_000);
    assert!(!report.brute_force.feasible);
    assert!(report.brute_force.complexity.is_infinite());
}
