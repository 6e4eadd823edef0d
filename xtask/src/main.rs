use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use graphwalk::{
    AdjacencyListReader, ConnectedComponents, Cycle, CycleDetector, DepthFirstOrder, Digraph,
    DirectedCycle, EdgeListReader, EdgeSink, Graph, Topological, TwoColor,
};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "graphwalk workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the traversal benchmarks and write a markdown report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
    /// Load a graph file and print every algorithm's verdict as JSON
    Analyze {
        /// Input file
        path: PathBuf,

        /// Treat edges as arcs
        #[arg(long, default_value_t = false)]
        directed: bool,

        /// Input format
        #[arg(long, value_enum, default_value_t = Format::EdgeList)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    EdgeList,
    AdjacencyList,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
        Commands::Analyze {
            path,
            directed,
            format,
        } => analyze(&path, directed, format)?,
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running traversal benchmarks...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.args(["bench", "--bench", "traversal_benchmark", "--"]);
    if quick {
        cmd.args(["--measurement-time", "0.1", "--noplot", "--sample-size", "10"]);
    }

    let status = cmd.status().context("Failed to run cargo bench")?;
    if !status.success() {
        anyhow::bail!("Benchmark run failed");
    }
    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut rows = Vec::new();
    collect_results(criterion_dir, &mut rows)?;
    rows.sort_by(|a, b| a.0.cmp(&b.0));

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut report = String::from("# Traversal Benchmark Report\n\n| Benchmark | Mean | Vertices/s |\n|---|---|---|\n");
    for (name, mean_ns, throughput) in rows {
        let rate = throughput.map_or_else(|| "-".to_string(), format_rate);
        report.push_str(&format!("| {name} | {} | {rate} |\n", format_time(mean_ns)));
    }
    fs::write(report_path, report)
        .with_context(|| format!("Failed to write {}", report_path.display()))?;

    println!("Report written to {}", report_path.display());
    Ok(())
}

/// Walks `target/criterion`, reading each `new/estimates.json`.
fn collect_results(dir: &Path, rows: &mut Vec<(String, f64, Option<f64>)>) -> Result<()> {
    for entry in fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if path.file_name().and_then(|s| s.to_str()) == Some("report") {
                continue;
            }
            collect_results(&path, rows)?;
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }
        let Some(sample_dir) = path.parent() else { continue };
        if sample_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }
        let Some(bench_dir) = sample_dir.parent() else { continue };

        let estimates: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        let Some(mean_ns) = estimates["mean"]["point_estimate"].as_f64() else {
            continue;
        };

        let benchmark: Option<serde_json::Value> = fs::read_to_string(sample_dir.join("benchmark.json"))
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok());
        let name = benchmark
            .as_ref()
            .and_then(|b| b["full_id"].as_str())
            .map_or_else(|| bench_dir.display().to_string(), str::to_string);
        let throughput = benchmark
            .as_ref()
            .and_then(|b| b["throughput"]["Elements"].as_f64())
            .filter(|_| mean_ns > 0.0)
            .map(|elements| elements * 1e9 / mean_ns);

        rows.push((name, mean_ns, throughput));
    }
    Ok(())
}

fn format_time(ns: f64) -> String {
    if ns > 1e6 {
        format!("{:.2} ms", ns / 1e6)
    } else if ns > 1e3 {
        format!("{:.2} µs", ns / 1e3)
    } else {
        format!("{ns:.0} ns")
    }
}

fn format_rate(rate: f64) -> String {
    if rate > 1_000_000.0 {
        format!("{:.2}M", rate / 1_000_000.0)
    } else if rate > 1_000.0 {
        format!("{:.2}K", rate / 1_000.0)
    } else {
        format!("{rate:.0}")
    }
}

#[derive(Serialize)]
struct UndirectedSummary {
    vertices: usize,
    edges: usize,
    components: usize,
    has_cycle: bool,
    cycle: Option<Vec<usize>>,
    bipartite: bool,
}

#[derive(Serialize)]
struct DirectedSummary {
    vertices: usize,
    edges: usize,
    has_cycle: bool,
    cycle: Option<Vec<usize>>,
    topological_order: Option<Vec<usize>>,
    preorder: Vec<usize>,
    postorder: Vec<usize>,
}

fn load<G: EdgeSink>(path: &Path, format: Format) -> Result<G> {
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let graph = match format {
        Format::EdgeList => EdgeListReader::new().parse(&text),
        Format::AdjacencyList => AdjacencyListReader::new().parse(&text),
    };
    graph.with_context(|| format!("Failed to parse {}", path.display()))
}

fn analyze(path: &Path, directed: bool, format: Format) -> Result<()> {
    let json = if directed {
        let dg: Digraph = load(path, format)?;
        let cycle = DirectedCycle::new(&dg);
        let order = DepthFirstOrder::new(&dg);
        let topo = Topological::new(&dg);
        serde_json::to_string_pretty(&DirectedSummary {
            vertices: dg.vertex_count(),
            edges: dg.edge_count(),
            has_cycle: cycle.has_cycle(),
            cycle: cycle.cycle().map(<[usize]>::to_vec),
            topological_order: topo.order().map(<[usize]>::to_vec),
            preorder: order.pre().to_vec(),
            postorder: order.post().to_vec(),
        })?
    } else {
        let g: Graph = load(path, format)?;
        let cycle = Cycle::new(&g);
        serde_json::to_string_pretty(&UndirectedSummary {
            vertices: g.vertex_count(),
            edges: g.edge_count(),
            components: ConnectedComponents::new(&g).count(),
            has_cycle: cycle.has_cycle(),
            cycle: cycle.cycle().map(<[usize]>::to_vec),
            bipartite: TwoColor::new(&g).is_bipartite(),
        })?
    };
    println!("{json}");
    Ok(())
}
