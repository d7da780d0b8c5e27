use anyhow::{anyhow, Result};
use knapsack_core::{assess_feasibility, ProblemInstance, Selection};
use knapsack_solvers::Solver;

pub fn make_seed(index: u64) -> [u8; 32] {
    let mut seed = [0u8; 32];
    seed[0..8].copy_from_slice(&index.to_le_bytes());
    seed
}

/// One CSV row / table line: a single solver run over a single instance.
pub struct RunRecord {
    pub algorithm: &'static str,
    pub num_items: usize,
    pub capacity: u32,
    pub seed: u64,
    pub elapsed_ms: f64,
    pub selected: usize,
    pub total_weight: u64,
    pub total_value: f64,
    pub utilization: f64,
    pub selection: Selection,
}

pub fn parse_solvers(spec: &str) -> Result<Vec<Solver>> {
    if spec == "all" {
        return Ok(Solver::ALL.to_vec());
    }
    spec.split(',').map(|s| Solver::from_name(s.trim())).collect()
}

/// Runs each requested solver over the instance, skipping the ones the
/// advisor marks infeasible unless `force` is set, and verifies every
/// returned selection before recording it.
pub fn run_solvers(
    instance: &ProblemInstance,
    seed: u64,
    solvers: &[Solver],
    force: bool,
) -> Result<Vec<RunRecord>> {
    let report = assess_feasibility(instance.num_items(), instance.capacity);
    let mut records = Vec::new();

    for solver in solvers {
        if !solver.is_feasible(&report) && !force {
            println!(
                "{}: skipped, advisor verdict is infeasible for n={}, C={} (--force overrides)",
                solver,
                instance.num_items(),
                instance.capacity
            );
            continue;
        }

        // A failed solve (e.g. DP table allocation) is reported and must
        // not take down the runs of the remaining solvers.
        let (outcome, elapsed) = match solver.solve_timed(instance) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("{}: solve error: {}", solver, e);
                continue;
            }
        };
        let total_value = outcome.selection.verify(instance)?;
        // Tolerance is relative: the solver and the verifier sum item
        // values in different orders.
        if (total_value - outcome.total_value).abs() > 1e-9 * total_value.abs().max(1.0) {
            return Err(anyhow!(
                "{}: reported value {} disagrees with selection value {}",
                solver,
                outcome.total_value,
                total_value
            ));
        }

        let total_weight = outcome.selection.total_weight(instance);
        records.push(RunRecord {
            algorithm: solver.name(),
            num_items: instance.num_items(),
            capacity: instance.capacity,
            seed,
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
            selected: outcome.selection.selected_count(),
            total_weight,
            total_value,
            utilization: if instance.capacity == 0 {
                0.0
            } else {
                total_weight as f64 / instance.capacity as f64 * 100.0
            },
            selection: outcome.selection,
        });
    }
    Ok(records)
}
