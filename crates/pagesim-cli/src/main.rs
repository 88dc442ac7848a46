//! pagesim command-line driver
//!
//! Replays a page reference string against a fixed frame budget under a
//! classical replacement policy and reports the faults incurred.
//!
//! # Usage
//!
//! ```bash
//! # References on the command line
//! pagesim fifo 3 1 2 3 4 1 2 5 1 2 3 4 5
//!
//! # References from a file
//! pagesim lru 4 --file refs.txt
//!
//! # References from stdin, summary as JSON
//! echo "1 2 3 1 2" | pagesim lfu 2 --output json
//! ```

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod formatter;
mod input;

use formatter::{OutputFormat, RunSummary};
use pagesim_common::constants::DEFAULT_PAGE_SPACE;
use pagesim_common::types::PageId;
use pagesim_engine::{AccessEvent, EngineConfig, PagingEngine, ReplacementPolicy};

/// Page replacement simulator
#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    version,
    about = "Simulate FIFO, LRU, and LFU page replacement over a reference string",
    long_about = "Replays a sequence of page references against a fixed number of frames\n\
                  under a classical replacement policy, printing a per-reference trace\n\
                  and a fault summary.\n\n\
                  References are taken from the command line, from --file, or from one\n\
                  line of space-separated integers on stdin."
)]
struct Args {
    /// Replacement policy
    #[arg(value_enum, ignore_case = true)]
    policy: PolicyArg,

    /// Number of physical frames
    frames: u32,

    /// Page references; read from --file or stdin when omitted
    refs: Vec<u32>,

    /// Read references from file instead of the command line
    #[arg(short = 'f', long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Page space size; defaults to the largest reference plus one
    #[arg(short = 'P', long, value_name = "PAGES")]
    pages: Option<u32>,

    /// Output format for the summary
    #[arg(short = 'o', long, value_enum, default_value = "table")]
    output: OutputFormatArg,

    /// Suppress the per-reference trace
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Enable verbose output
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Replacement policy argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// First-in-first-out
    Fifo,
    /// Least-recently-used
    Lru,
    /// Least-frequently-used
    Lfu,
}

impl From<PolicyArg> for ReplacementPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Fifo => ReplacementPolicy::Fifo,
            PolicyArg::Lru => ReplacementPolicy::Lru,
            PolicyArg::Lfu => ReplacementPolicy::Lfu,
        }
    }
}

/// Output format argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormatArg {
    /// Display the summary as a formatted table
    Table,
    /// Display the summary (and trace) as JSON
    Json,
    /// Display the summary as a single raw line
    Raw,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Table => OutputFormat::Table,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Raw => OutputFormat::Raw,
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);

    let refs = gather_references(&args)?;
    let page_count = page_space_for(&args, &refs)?;
    let policy = ReplacementPolicy::from(args.policy);
    let format = OutputFormat::from(args.output);

    info!(
        policy = %policy,
        frames = args.frames,
        pages = page_count,
        refs = refs.len(),
        "starting simulation"
    );

    let config = EngineConfig::new(policy, page_count, args.frames);
    let mut engine = PagingEngine::new(config)?;

    let show_trace = !args.quiet;
    if show_trace && format != OutputFormat::Json {
        println!("{}", formatter::run_header(policy, args.frames));
    }

    let mut trace: Vec<AccessEvent> = Vec::with_capacity(refs.len());
    for &page in &refs {
        let event = engine.step(PageId::new(page))?;
        if show_trace && format != OutputFormat::Json {
            println!("{}", formatter::trace_line(&event, &engine.frames()));
        }
        trace.push(event);
    }

    let summary = RunSummary::from_engine(&engine);
    match format {
        OutputFormat::Json => {
            let events = if show_trace { trace.as_slice() } else { &[] };
            println!("{}", formatter::render_json(&summary, events));
        }
        _ => println!("{}", formatter::render_summary(&summary, format)),
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("pagesim_cli=debug,pagesim_engine=debug")
    } else {
        EnvFilter::new("pagesim_cli=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// Collects the reference string from the command line, a file, or stdin.
fn gather_references(args: &Args) -> Result<Vec<u32>> {
    let refs = if !args.refs.is_empty() {
        args.refs.clone()
    } else if let Some(path) = &args.file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading references from {}", path.display()))?;
        input::parse_references(&content)?
    } else {
        let mut line = String::new();
        std::io::stdin()
            .read_to_string(&mut line)
            .context("reading references from stdin")?;
        input::parse_references(&line)?
    };

    if refs.is_empty() {
        bail!("no references provided");
    }

    Ok(refs)
}

/// Resolves the page space and validates every reference against it.
fn page_space_for(args: &Args, refs: &[u32]) -> Result<u32> {
    let page_count = match args.pages {
        Some(pages) => pages,
        None => refs
            .iter()
            .max()
            .map(|&max| max.saturating_add(1))
            .unwrap_or(DEFAULT_PAGE_SPACE),
    };

    if let Some(&bad) = refs.iter().find(|&&r| r >= page_count) {
        bail!("reference {bad} outside the page space of {page_count} (use --pages to widen it)");
    }

    Ok(page_count)
}
