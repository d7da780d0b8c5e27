pub mod branch_and_bound;
pub mod brute_force;
pub mod dynamic;
pub mod greedy;

use anyhow::{anyhow, Result};
use knapsack_core::{FeasibilityReport, ProblemInstance, SolveOutcome};
use std::fmt;
use std::time::{Duration, Instant};

/// The four solver strategies. All of them return selections indexed by
/// original item id, verified feasible against the instance capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Greedy,
    Dynamic,
    BranchAndBound,
    BruteForce,
}

impl Solver {
    pub const ALL: [Solver; 4] = [
        Solver::Greedy,
        Solver::Dynamic,
        Solver::BranchAndBound,
        Solver::BruteForce,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Solver::Greedy => "greedy",
            Solver::Dynamic => "dynamic",
            Solver::BranchAndBound => "branch_and_bound",
            Solver::BruteForce => "brute_force",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "greedy" => Ok(Solver::Greedy),
            "dynamic" | "dp" => Ok(Solver::Dynamic),
            "branch_and_bound" | "backtracking" | "bb" => Ok(Solver::BranchAndBound),
            "brute_force" | "brute" => Ok(Solver::BruteForce),
            _ => Err(anyhow!("Unknown solver: {}", name)),
        }
    }

    pub fn is_feasible(&self, report: &FeasibilityReport) -> bool {
        match self {
            Solver::Greedy => report.greedy.feasible,
            Solver::Dynamic => report.dynamic.feasible,
            Solver::BranchAndBound => report.branch_and_bound.feasible,
            Solver::BruteForce => report.brute_force.feasible,
        }
    }

    pub fn solve(&self, instance: &ProblemInstance) -> Result<SolveOutcome> {
        match self {
            Solver::Greedy => greedy::solve_instance(instance),
            Solver::Dynamic => dynamic::solve_instance(instance),
            Solver::BranchAndBound => branch_and_bound::solve_instance(instance),
            Solver::BruteForce => brute_force::solve_instance(instance),
        }
    }

    /// Uniform contract for the reporting layer: selection, achieved value
    /// and elapsed wall time.
    pub fn solve_timed(&self, instance: &ProblemInstance) -> Result<(SolveOutcome, Duration)> {
        let start = Instant::now();
        let outcome = self.solve(instance)?;
        Ok((outcome, start.elapsed()))
    }
}

impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
