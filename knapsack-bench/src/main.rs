mod report;
mod runner;

use anyhow::{anyhow, Result};
use clap::{arg, Command};
use knapsack_core::{assess_feasibility, GenerationParams, ProblemInstance};
use std::{fs, path::PathBuf};

fn cli() -> Command {
    Command::new("knapsack-bench")
        .about("Generates 0/1 knapsack instances and benchmarks solver strategies")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("solve")
                .about("Generates one instance and runs solvers on it")
                .arg(arg!(<NUM_ITEMS> "Number of items").value_parser(clap::value_parser!(usize)))
                .arg(arg!(<CAPACITY> "Knapsack capacity").value_parser(clap::value_parser!(u32)))
                .arg(
                    arg!(--algo [ALGO] "Comma separated solvers (greedy, dynamic, branch_and_bound, brute_force) or 'all'")
                        .default_value("all"),
                )
                .arg(
                    arg!(--seed [SEED] "Seed index for instance generation")
                        .default_value("0")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(arg!(--force "Run solvers the advisor marks infeasible"))
                .arg(arg!(--"show-items" "List the selected items per solver"))
                .arg(
                    arg!(--csv [PATH] "Append one CSV row per solver run")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--dump [PATH] "Write the generated instance as JSON")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("bench")
                .about("Sweeps instance sizes over several seeds and summarizes elapsed time")
                .arg(arg!(--items [ITEMS] "Comma separated item counts").default_value("1000,2000,4000,8000"))
                .arg(
                    arg!(--capacity [CAPACITY] "Knapsack capacity")
                        .default_value("10000")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    arg!(--seeds [SEEDS] "Number of seeds per configuration")
                        .default_value("5")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(--algo [ALGO] "Comma separated solvers or 'all'")
                        .default_value("all"),
                )
                .arg(arg!(--force "Run solvers the advisor marks infeasible"))
                .arg(
                    arg!(--csv [PATH] "Append one CSV row per solver run")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("feasibility")
                .about("Prints the advisor's per-strategy verdicts")
                .arg(arg!(<NUM_ITEMS> "Number of items").value_parser(clap::value_parser!(usize)))
                .arg(arg!(<CAPACITY> "Knapsack capacity").value_parser(clap::value_parser!(u32))),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("solve", sub_m)) => solve(
            *sub_m.get_one::<usize>("NUM_ITEMS").unwrap(),
            *sub_m.get_one::<u32>("CAPACITY").unwrap(),
            sub_m.get_one::<String>("algo").unwrap(),
            *sub_m.get_one::<u64>("seed").unwrap(),
            sub_m.get_flag("force"),
            sub_m.get_flag("show-items"),
            sub_m.get_one::<PathBuf>("csv").cloned(),
            sub_m.get_one::<PathBuf>("dump").cloned(),
        ),
        Some(("bench", sub_m)) => bench(
            sub_m.get_one::<String>("items").unwrap(),
            *sub_m.get_one::<u32>("capacity").unwrap(),
            *sub_m.get_one::<u64>("seeds").unwrap(),
            sub_m.get_one::<String>("algo").unwrap(),
            sub_m.get_flag("force"),
            sub_m.get_one::<PathBuf>("csv").cloned(),
        ),
        Some(("feasibility", sub_m)) => feasibility(
            *sub_m.get_one::<usize>("NUM_ITEMS").unwrap(),
            *sub_m.get_one::<u32>("CAPACITY").unwrap(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn solve(
    num_items: usize,
    capacity: u32,
    algo: &str,
    seed: u64,
    force: bool,
    show_items: bool,
    csv: Option<PathBuf>,
    dump: Option<PathBuf>,
) -> Result<()> {
    let solvers = runner::parse_solvers(algo)?;
    let params = GenerationParams::new(num_items, capacity);
    let instance = ProblemInstance::generate_instance(&runner::make_seed(seed), &params)?;

    if let Some(path) = dump {
        fs::write(&path, serde_json::to_string_pretty(&instance)?)
            .map_err(|e| anyhow!("Failed to write instance to {}: {}", path.display(), e))?;
        println!("Instance saved to {}", path.display());
    }

    report::print_feasibility(
        num_items,
        capacity,
        &assess_feasibility(num_items, capacity),
    );
    println!();

    let records = runner::run_solvers(&instance, seed, &solvers, force)?;
    report::print_records(&records);

    if show_items {
        for record in &records {
            println!("\n{} selected items:", record.algorithm);
            println!("{:<8} {:>8} {:>10}", "id", "weight", "value");
            for id in record.selection.selected_items() {
                let item = &instance.items[id];
                println!("{:<8} {:>8} {:>10.2}", item.id, item.weight, item.value);
            }
        }
    }

    if let Some(path) = csv {
        report::append_csv(&path, &records)?;
        println!("\nResults appended to {}", path.display());
    }
    Ok(())
}

fn bench(
    items: &str,
    capacity: u32,
    num_seeds: u64,
    algo: &str,
    force: bool,
    csv: Option<PathBuf>,
) -> Result<()> {
    let solvers = runner::parse_solvers(algo)?;
    let sizes = items
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<usize>()
                .map_err(|e| anyhow!("Invalid item count '{}': {}", s, e))
        })
        .collect::<Result<Vec<_>>>()?;
    if num_seeds == 0 {
        return Err(anyhow!("Number of seeds must be non-zero"));
    }

    let mut all_records = Vec::new();
    for &num_items in &sizes {
        let params = GenerationParams::new(num_items, capacity);
        println!(
            "\n=== n={} C={} ({} seeds) ===",
            num_items, capacity, num_seeds
        );
        for seed in 0..num_seeds {
            let instance =
                ProblemInstance::generate_instance(&runner::make_seed(seed), &params)?;
            let records = runner::run_solvers(&instance, seed, &solvers, force)?;
            all_records.extend(records);
        }
    }

    report::print_summary(&all_records);

    if let Some(path) = csv {
        report::append_csv(&path, &all_records)?;
        println!("\nResults appended to {}", path.display());
    }
    Ok(())
}

fn feasibility(num_items: usize, capacity: u32) -> Result<()> {
    report::print_feasibility(
        num_items,
        capacity,
        &assess_feasibility(num_items, capacity),
    );
    Ok(())
}
