use crate::runner::RunRecord;
use anyhow::{anyhow, Result};
use knapsack_core::{FeasibilityReport, StrategyVerdict};
use std::fmt::Write as FmtWrite;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

pub struct Stats {
    values: Vec<f64>,
}

impl Stats {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }
    pub fn push(&mut self, v: f64) {
        self.values.push(v);
    }
    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }
    pub fn min(&self) -> f64 {
        self.values.iter().cloned().fold(f64::INFINITY, f64::min)
    }
    pub fn max(&self) -> f64 {
        self.values.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }
}

pub const CSV_HEADER: &str =
    "algorithm,num_items,capacity,seed,elapsed_ms,selected,total_weight,total_value,utilization";

/// Appends one row per record, writing the header only when the file is
/// created.
pub fn append_csv(path: &Path, records: &[RunRecord]) -> Result<()> {
    let new_file = !path.exists();
    let mut out = String::new();
    if new_file {
        writeln!(out, "{}", CSV_HEADER).unwrap();
    }
    for r in records {
        writeln!(
            out,
            "{},{},{},{},{:.3},{},{},{:.2},{:.2}",
            r.algorithm,
            r.num_items,
            r.capacity,
            r.seed,
            r.elapsed_ms,
            r.selected,
            r.total_weight,
            r.total_value,
            r.utilization
        )
        .unwrap();
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| anyhow!("Failed to open CSV file {}: {}", path.display(), e))?;
    file.write_all(out.as_bytes())
        .map_err(|e| anyhow!("Failed to write CSV file {}: {}", path.display(), e))?;
    Ok(())
}

pub fn print_records(records: &[RunRecord]) {
    println!(
        "{:<18} {:>12} {:>9} {:>13} {:>12} {:>8}",
        "algorithm", "elapsed_ms", "selected", "total_weight", "total_value", "util_%"
    );
    println!("{}", "-".repeat(78));
    for r in records {
        println!(
            "{:<18} {:>12.3} {:>9} {:>13} {:>12.2} {:>8.2}",
            r.algorithm, r.elapsed_ms, r.selected, r.total_weight, r.total_value, r.utilization
        );
    }
}

/// Mean elapsed time and value per (algorithm, size) over all seeds.
pub fn print_summary(records: &[RunRecord]) {
    let mut groups: Vec<(&'static str, usize, Stats, Stats)> = Vec::new();
    for r in records {
        match groups
            .iter_mut()
            .find(|(algo, n, _, _)| *algo == r.algorithm && *n == r.num_items)
        {
            Some((_, _, elapsed, value)) => {
                elapsed.push(r.elapsed_ms);
                value.push(r.total_value);
            }
            None => {
                let mut elapsed = Stats::new();
                let mut value = Stats::new();
                elapsed.push(r.elapsed_ms);
                value.push(r.total_value);
                groups.push((r.algorithm, r.num_items, elapsed, value));
            }
        }
    }
    if groups.is_empty() {
        return;
    }

    println!(
        "\n{:<18} {:>9} {:>12} {:>12} {:>12} {:>14}",
        "algorithm", "n", "avg_ms", "min_ms", "max_ms", "avg_value"
    );
    println!("{}", "-".repeat(82));
    for (algo, n, elapsed, value) in &groups {
        println!(
            "{:<18} {:>9} {:>12.3} {:>12.3} {:>12.3} {:>14.2}",
            algo,
            n,
            elapsed.mean(),
            elapsed.min(),
            elapsed.max(),
            value.mean()
        );
    }
}

pub fn print_feasibility(num_items: usize, capacity: u32, report: &FeasibilityReport) {
    fn line(name: &str, verdict: &StrategyVerdict) {
        let mark = if verdict.feasible { "ok" } else { "--" };
        println!("{:<18} {:>4}   est. operations: {:.3e}", name, mark, verdict.complexity);
    }
    println!("Feasibility for n={}, C={}:", num_items, capacity);
    line("greedy", &report.greedy);
    line("dynamic", &report.dynamic);
    line("branch_and_bound", &report.branch_and_bound);
    line("brute_force", &report.brute_force);
}
