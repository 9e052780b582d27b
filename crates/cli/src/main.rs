//! Page replacement simulator CLI.
//!
//! This binary provides a single entry point for all simulation modes. It performs:
//! 1. **Run:** Simulate one policy and print the step trace and summary (or JSON).
//! 2. **Compare:** Simulate every policy over the same input in parallel.
//! 3. **Export:** Write the CSV trace of one run to a file.
//! 4. **Info:** Describe the supported policies.
//!
//! Input range limits (string length, highest page, frame count) are enforced
//! here, before the engine is called.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pagesim_core::config::{ReferenceSource, ResolvedInput, SimConfig};
use pagesim_core::input::InputLimits;
use pagesim_core::stats::{StepStats, comparison_table};
use pagesim_core::trace::{self, Replay};
use pagesim_core::{Algorithm, SimulationResult, Step};

type CliResult = Result<(), Box<dyn Error>>;

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Step-by-step page replacement simulator",
    long_about = "Simulate FIFO, LRU, Optimal, Second Chance (Clock) and LFU page replacement over a reference string.\n\nExamples:\n  pagesim run -a lru -f 3 -p \"7 0 1 2 0 3 0 4\"\n  pagesim compare --random 20 --max-page 9 --seed 42\n  pagesim export -a secondChance -p 1,2,3,1,2,4 -o trace.csv\n  pagesim run --config sim.json --json"
)]
struct Cli {
    /// Log engine decisions to stderr (repeat for more detail). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate one algorithm and print the trace.
    Run {
        #[command(flatten)]
        input: InputArgs,

        /// Print the full result as JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Print only the given (1-based) step.
        #[arg(long)]
        step: Option<usize>,
    },

    /// Simulate every algorithm over the same input and compare them.
    Compare {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Write the CSV trace of one run.
    Export {
        #[command(flatten)]
        input: InputArgs,

        /// Output path (defaults to `page_replacement_<algorithm>_trace.csv`).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Describe one or all algorithms.
    Info {
        /// Algorithm identifier (fifo, lru, optimal, secondChance, lfu).
        algorithm: Option<String>,
    },
}

#[derive(Args, Debug)]
struct InputArgs {
    /// JSON configuration file; the flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Algorithm identifier (fifo, lru, optimal, secondChance, lfu).
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Number of frames.
    #[arg(short, long)]
    frames: Option<usize>,

    /// Reference string, comma and/or whitespace separated.
    #[arg(short, long, conflicts_with = "random")]
    pages: Option<String>,

    /// Generate a random reference string of this length.
    #[arg(short, long)]
    random: Option<usize>,

    /// Highest page number of a random reference string.
    #[arg(long, requires = "random")]
    max_page: Option<usize>,

    /// Seed for a reproducible random reference string.
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Skip the input range limits (the engine still rejects zero frames).
    #[arg(long)]
    no_limits: bool,
}

impl InputArgs {
    /// Merges the config file (or defaults) with the command-line overrides.
    fn to_config(&self) -> Result<SimConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => SimConfig::load(path)?,
            None => SimConfig::default(),
        };

        if let Some(id) = &self.algorithm {
            config.algorithm = id.parse()?;
        }
        if let Some(frames) = self.frames {
            config.frames = frames;
        }
        if let Some(pages) = &self.pages {
            config.reference = ReferenceSource::Custom {
                pages: pages.clone(),
            };
        } else if let Some(length) = self.random {
            let (max_page, seed) = match &config.reference {
                ReferenceSource::Random { max_page, seed, .. } => (Some(*max_page), *seed),
                ReferenceSource::Custom { .. } => (None, None),
            };
            config.reference =
                ReferenceSource::random(length, self.max_page.or(max_page), self.seed.or(seed));
        }
        if self.no_limits {
            config.limits = InputLimits::unbounded();
        }
        Ok(config)
    }

    fn resolve(&self) -> Result<ResolvedInput, Box<dyn Error>> {
        let resolved = self.to_config()?.resolve()?;
        info!(
            algorithm = resolved.algorithm.id(),
            frames = resolved.frames,
            references = resolved.pages.len(),
            "resolved input"
        );
        Ok(resolved)
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = match cli.command {
        Commands::Run { input, json, step } => cmd_run(&input, json, step),
        Commands::Compare { input } => cmd_compare(&input),
        Commands::Export { input, output } => cmd_export(&input, output),
        Commands::Info { algorithm } => cmd_info(algorithm.as_deref()),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the verbosity flag.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Simulates one algorithm and prints the trace (or a single step) and the summary.
fn cmd_run(input: &InputArgs, json: bool, step: Option<usize>) -> CliResult {
    let resolved = input.resolve()?;
    let result = pagesim_core::run(resolved.algorithm, &resolved.pages, resolved.frames)?;

    if json {
        println!("{}", result.to_json()?);
        return Ok(());
    }

    println!("[*] {}", result.algorithm.title());
    println!("    {}", result.algorithm.description());
    println!("    Reference string: {}", join(&resolved.pages));
    println!("    Frames: {}", result.frame_count);
    println!();

    match step {
        Some(n) => {
            let mut replay = Replay::new(&result);
            let target = n.checked_sub(1).filter(|&i| i < replay.len()).ok_or_else(|| {
                format!("step {n} out of range (trace has {} steps)", replay.len())
            })?;
            if let Some(s) = replay.seek(target) {
                print_step(s, &result);
            }
        }
        None => {
            for s in &result.steps {
                print_step(s, &result);
            }
        }
    }

    result.print_summary();
    Ok(())
}

fn print_step(step: &Step, result: &SimulationResult) {
    let stats = StepStats::for_step(step, result.frame_count);
    println!("{}", step.describe(result.frame_count));
    println!(
        "Faults: {}  Hit Rate: {:.1}%  Utilization: {}%  Total: {}",
        stats.faults, stats.hit_rate, stats.utilization, stats.references
    );
    println!();
}

/// Runs every algorithm over the same input and prints a comparison table.
fn cmd_compare(input: &InputArgs) -> CliResult {
    let resolved = input.resolve()?;
    let results = pagesim_core::compare(&Algorithm::ALL, &resolved.pages, resolved.frames)?;

    println!("Reference string: {}", join(&resolved.pages));
    println!("Frames: {}", resolved.frames);
    println!();
    println!("{}", comparison_table(&results));
    Ok(())
}

/// Writes the CSV trace of one run.
fn cmd_export(input: &InputArgs, output: Option<PathBuf>) -> CliResult {
    let resolved = input.resolve()?;
    let result = pagesim_core::run(resolved.algorithm, &resolved.pages, resolved.frames)?;

    let path = output.unwrap_or_else(|| PathBuf::from(trace::default_file_name(&result)));
    let file = File::create(&path)?;
    trace::write_csv(&result, BufWriter::new(file))?;

    println!(
        "[*] Wrote {} steps ({}) to {}",
        result.steps.len(),
        result.algorithm.title(),
        path.display()
    );
    Ok(())
}

/// Prints the title and description of one or all algorithms.
fn cmd_info(algorithm: Option<&str>) -> CliResult {
    let selected = match algorithm {
        Some(id) => vec![id.parse::<Algorithm>()?],
        None => Algorithm::ALL.to_vec(),
    };
    for a in selected {
        println!("{:<14} {}", a.id(), a.title());
        println!("               {}", a.description());
    }
    Ok(())
}

fn join(pages: &[pagesim_core::PageId]) -> String {
    pages
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
