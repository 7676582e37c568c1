use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Stowage workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the container benchmarks and write a markdown report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Criterion baseline to save this run under
        #[arg(long, default_value = "current")]
        baseline: String,

        /// Baseline every other column is compared against
        #[arg(long, default_value = "current")]
        reference: String,
    },
}

const BENCH: &str = "collections_benchmark";
const CRITERION_DIR: &str = "target/criterion";
const REPORT_PATH: &str = "benchmark_results/report.md";

/// `estimates.json`, reduced to the fields the report needs.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// `benchmark.json`, reduced to the throughput declaration.
#[derive(Deserialize)]
struct BenchmarkInfo {
    #[serde(default)]
    throughput: Option<Throughput>,
}

#[derive(Deserialize)]
enum Throughput {
    Elements(f64),
    Bytes(f64),
}

/// workload -> baseline -> ops/s
type Results = BTreeMap<String, BTreeMap<String, f64>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            baseline,
            reference,
        } => {
            if !report_only {
                run_benchmarks(quick, &baseline)?;
            }
            generate_report(&reference)?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool, baseline: &str) -> Result<()> {
    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["build", "--bench", BENCH, "--release"])
        .status()?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    println!("\n>>> Benchmarking into baseline: {baseline}");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0");
    cmd.args(["bench", "--bench", BENCH]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    cmd.arg("--save-baseline").arg(baseline);

    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd
        .status()
        .with_context(|| format!("Failed to run {BENCH}"))?;
    if !status.success() {
        anyhow::bail!("Benchmark run failed");
    }
    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report(reference: &str) -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new(CRITERION_DIR);
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, criterion_dir, &mut results);

    let baselines: BTreeSet<&str> = results
        .values()
        .flat_map(|by_baseline| by_baseline.keys().map(String::as_str))
        .collect();

    let report_path = Path::new(REPORT_PATH);
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("Failed to create {}", report_path.display()))?;

    writeln!(file, "# Container Benchmark Report")?;
    writeln!(file)?;

    write!(file, "| Workload |")?;
    for baseline in &baselines {
        write!(file, " {baseline} (Ops/s) | vs {reference} |")?;
    }
    writeln!(file)?;

    write!(file, "|---|")?;
    for _ in &baselines {
        write!(file, "---|---|")?;
    }
    writeln!(file)?;

    for (workload, by_baseline) in &results {
        write!(file, "| {workload} |")?;
        let reference_ops = by_baseline.get(reference).copied().unwrap_or(0.0);
        for baseline in &baselines {
            match by_baseline.get(*baseline) {
                Some(ops) => {
                    let rel = if reference_ops > 0.0 { ops / reference_ops } else { 0.0 };
                    write!(file, " {} | **{rel:.2}x** |", format_ops(*ops))?;
                }
                None => write!(file, " N/A | - |")?,
            }
        }
        writeln!(file)?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Option<T> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Walks `dir` for `<workload...>/<baseline>/estimates.json`.
fn collect_results(root: &Path, dir: &Path, results: &mut Results) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(root, &path, results);
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }
        let Some(baseline_dir) = path.parent() else {
            continue;
        };
        let Some(workload_dir) = baseline_dir.parent() else {
            continue;
        };
        let Some(baseline) = baseline_dir.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        // Criterion keeps the latest run under `new` and the one before under `base`.
        if matches!(baseline, "report" | "new" | "base" | "change") {
            continue;
        }
        let Ok(relative) = workload_dir.strip_prefix(root) else {
            continue;
        };
        let workload = relative.to_string_lossy().replace('\\', "/");

        let elements = read_json::<BenchmarkInfo>(&baseline_dir.join("benchmark.json"))
            .and_then(|info| info.throughput)
            .map(|throughput| match throughput {
                Throughput::Elements(n) | Throughput::Bytes(n) => n,
            })
            .unwrap_or(1.0);

        let Some(estimates) = read_json::<Estimates>(&path) else {
            continue;
        };
        let time_ns = estimates.mean.point_estimate;
        if time_ns > 0.0 {
            results
                .entry(workload)
                .or_default()
                .insert(baseline.to_owned(), elements * 1e9 / time_ns);
        }
    }
}
