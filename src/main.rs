use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use cpu_schedsim::input::load_processes_from_path;
use cpu_schedsim::models::Process;
use cpu_schedsim::render::render_all;
use cpu_schedsim::scheduler::{simulate_each, Algorithm, SimulationConfig};
use cpu_schedsim::workload::{generate, WorkloadConfig};
use cpu_schedsim::Result;

/// Algorithm selection on the command line
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
enum AlgorithmArg {
    /// Run every algorithm
    All,
    /// First-come, first-serve
    Fcfs,
    /// Shortest-job-first
    Sjf,
    /// Priority scheduling
    Priority,
    /// Round-robin
    Rr,
}

impl AlgorithmArg {
    fn algorithms(self) -> Vec<Algorithm> {
        match self {
            AlgorithmArg::All => Algorithm::ALL.to_vec(),
            AlgorithmArg::Fcfs => vec![Algorithm::Fcfs],
            AlgorithmArg::Sjf => vec![Algorithm::Sjf],
            AlgorithmArg::Priority => vec![Algorithm::Priority],
            AlgorithmArg::Rr => vec![Algorithm::RoundRobin],
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
enum OutputFormat {
    Text,
    Json,
}

/// Simulate CPU-scheduling algorithms over a process batch
#[derive(Parser, Debug)]
#[command(name = "cpu-schedsim", version)]
#[command(about = "Simulate FCFS, SJF, priority and round-robin scheduling", long_about = None)]
struct Args {
    /// CSV batch: id,burst,arrival[,priority] per line
    #[arg(required_unless_present = "generate", conflicts_with = "generate")]
    file: Option<PathBuf>,

    /// Algorithm to run
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::All)]
    algorithm: AlgorithmArg,

    /// JSON file with a SimulationConfig; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Round-robin time quantum
    #[arg(short, long)]
    quantum: Option<i64>,

    /// Preemptive SJF (SRTF) and priority scheduling
    #[arg(short, long, default_value_t = false)]
    preemptive: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Generate a random batch of N processes instead of reading a file
    #[arg(short, long, value_name = "N")]
    generate: Option<usize>,

    /// Seed for --generate
    #[arg(short, long, default_value_t = 0, requires = "generate")]
    seed: u64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "simulation failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = build_config(args)?;
    let processes = load_batch(args)?;
    debug!(?config, processes = processes.len(), "starting simulation");

    let reports = simulate_each(&args.algorithm.algorithms(), &processes, &config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Text => render_all(&mut out, &reports)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &reports)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn build_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_json(&fs::read_to_string(path)?)?,
        None => SimulationConfig::default(),
    };
    if let Some(quantum) = args.quantum {
        config = config.with_quantum(quantum);
    }
    if args.preemptive {
        config = config.with_preemptive(true);
    }
    config.validate()?;
    Ok(config)
}

fn load_batch(args: &Args) -> Result<Vec<Process>> {
    match (&args.file, args.generate) {
        (_, Some(count)) => generate(&WorkloadConfig::with_count(count), args.seed),
        (Some(path), None) => load_processes_from_path(path),
        (None, None) => Ok(Vec::new()),
    }
}
