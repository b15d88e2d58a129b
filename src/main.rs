//! SimpleGA CLI - Run parameter sweeps from JSON configuration.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::fs;
use std::path::PathBuf;

use simple_ga::{SweepConfig, SweepRunner};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--example" {
        print_example_config();
        return;
    }

    if args.len() < 2 {
        eprintln!("Usage: {} <sweep.json> [report.json]", args[0]);
        eprintln!();
        eprintln!("Measure how one genetic algorithm parameter affects performance.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  sweep.json   Path to sweep configuration file");
        eprintln!("  report.json  Where to write the aggregated report (optional)");
        eprintln!();
        eprintln!("An example configuration is printed with --example.");
        std::process::exit(1);
    }

    let config_path = PathBuf::from(&args[1]);
    let report_path = args.get(2).map(PathBuf::from);

    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let config: SweepConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    let runner = SweepRunner::new(config).unwrap_or_else(|e| {
        eprintln!("Invalid config: {}", e);
        std::process::exit(1);
    });

    let config = runner.config();
    let base = config.base;

    println!("SimpleGA Parameter Sweep");
    println!("========================");
    println!(
        "Parameter: {:?} over {}..{} step {}",
        config.parameter, config.start, config.stop, config.step
    );
    println!(
        "Base: length={} population={} generations={} mutation={} crossover={}",
        base.genotype_length(),
        base.population_size(),
        base.maximum_generations(),
        base.mutation_rate(),
        base.crossover_rate()
    );
    println!("Trials: {}", config.trials);
    println!();
    println!("{:>10}  {:>14}  {:>12}  {:>12}", "value", "avg time (s)", "success (%)", "avg gens");

    let report = runner.run_with_callback(|point| {
        println!(
            "{:>10}  {:>14.6}  {:>12.1}  {:>12.2}",
            point.value,
            point.stats.average_time,
            point.stats.success_rate * 100.0,
            point.stats.average_generations
        );
    });

    println!();
    println!(
        "Time: {:.2}s (seed {})",
        report.elapsed_seconds,
        report.config.random_seed.unwrap_or_default()
    );

    if let Some(path) = report_path {
        if let Err(e) = report.save_json(&path) {
            eprintln!("Error writing report: {}", e);
            std::process::exit(1);
        }
        println!("Report written to {}", path.display());
    }
}

fn print_example_config() {
    let config = SweepConfig {
        random_seed: Some(42),
        ..Default::default()
    };

    println!("Example configuration (sweep.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error encoding example: {}", e),
    }
}
