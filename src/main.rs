use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use std::{path::PathBuf, process::ExitCode};
use waystations::{input, logger::DevLogger, Solver, SolverConfig};
use waystations_core::devlog::write_session_markdown;

#[derive(Parser, Debug)]
#[command(name = "waystations", version, about = "Waystations word-path puzzle solver with devlogs")]
struct Cli {
    /// Grid file: one row per line, spaces for free cells, letters for anchors.
    grid: PathBuf,

    /// Word list, one word per line.
    words: PathBuf,

    /// Repeat the full placement this many times and report timings.
    #[arg(short, long, default_value_t = 1)]
    runs: usize,

    /// Directory for numbered devlog files
    #[arg(long, default_value = "devlogs")]
    devlogs: PathBuf,

    /// Echo progress to the console only; write no devlog files
    #[arg(long)]
    no_devlogs: bool,

    /// Maximum devlogs to write (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    max_logs: usize,

    /// Emit devlogs to console with colors
    #[arg(long)]
    color: bool,

    /// Step-by-step mode (pauses after each devlog step). Press Enter to continue.
    #[arg(long)]
    step: bool,

    /// Warn when a word leaves more than this many candidate grids
    #[arg(long)]
    growth_warning: Option<usize>,

    /// Write a markdown session report into this directory
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print the session as JSON instead of text grids
    #[cfg(feature = "serde")]
    #[arg(long)]
    json: bool,

    /// More log output (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let mut builder = env_logger::Builder::new();
    builder.filter(None, level).format_timestamp(None).format_target(false);
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    builder.init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let grid = input::read_grid(&cli.grid)?;
    let words = input::read_words(&cli.words)?;
    let mut logger = if cli.no_devlogs {
        DevLogger::console(cli.color, cli.step)
    } else {
        DevLogger::new(&cli.devlogs, cli.color, cli.step, cli.max_logs)
            .with_context(|| format!("creating devlog dir {}", cli.devlogs.display()))?
    };

    let mut solver = Solver::new(SolverConfig { runs: cli.runs, growth_warning: cli.growth_warning });
    let report = solver.run(&grid, &words, &mut logger)?;

    if let Some(dir) = &cli.report {
        let path = write_session_markdown(dir, &report.session).with_context(|| format!("writing report to {}", dir.display()))?;
        log::info!("session report written to {}", path.display());
    }

    #[cfg(feature = "serde")]
    {
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(exit_code(&report));
        }
    }

    let session = &report.session;
    println!("\nloaded {} words!", session.words.len());
    if let Some(flat) = &session.flattened {
        println!("{flat}");
    }
    for view in &session.views {
        println!("Showing only \"{}\":\n{}", view.word, view.grid);
    }
    if cli.runs > 1 {
        for (i, t) in report.timings.iter().enumerate() {
            println!("run {}: {:?}", i + 1, t);
        }
    }
    if let Some(word) = report.failed_word() {
        eprintln!("could not produce any paths to fit \"{word}\"!");
    }
    Ok(exit_code(&report))
}

fn exit_code(report: &waystations::RunReport) -> ExitCode {
    if report.is_complete() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
