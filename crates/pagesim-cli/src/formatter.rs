//! Output formatting for simulation runs.
//!
//! The reporter is decoupled from the engine: it consumes access events and
//! the frame view, never engine internals. Supports table, JSON, and raw
//! output for the run summary, plus the per-reference trace.

use comfy_table::{Cell, ContentArrangement, Table};
use serde::Serialize;

use pagesim_common::types::PageId;
use pagesim_engine::{AccessEvent, PagingEngine, ReplacementPolicy};

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Formatted table output.
    Table,
    /// JSON output.
    Json,
    /// Raw single-line summary.
    Raw,
}

/// Summary of one simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Replacement policy used.
    pub policy: ReplacementPolicy,
    /// Frame budget.
    pub frame_count: u32,
    /// Page space size.
    pub page_count: u32,
    /// References replayed.
    pub references: u64,
    /// Accesses satisfied by a resident page.
    pub hits: u64,
    /// Accesses that faulted.
    pub faults: u64,
    /// Faults as a fraction of references.
    pub fault_ratio: f64,
}

impl RunSummary {
    /// Builds a summary from the engine's run statistics.
    pub fn from_engine(engine: &PagingEngine) -> Self {
        let stats = engine.stats();
        Self {
            policy: engine.policy(),
            frame_count: engine.config().frame_count,
            page_count: engine.config().page_count,
            references: stats.accesses(),
            hits: stats.hits(),
            faults: stats.faults(),
            fault_ratio: stats.fault_ratio(),
        }
    }
}

/// Renders the frame contents as `[ 1 2 . ]`, with `.` for frames that
/// have never been used.
pub fn frame_row(frames: &[Option<PageId>]) -> String {
    let cells: Vec<String> = frames
        .iter()
        .map(|slot| match slot {
            Some(page) => page.to_string(),
            None => ".".to_string(),
        })
        .collect();
    format!("[ {} ]", cells.join(" "))
}

/// Renders one per-reference trace line: the reference, the frame contents
/// after the operation, and whether it hit or faulted.
pub fn trace_line(event: &AccessEvent, frames: &[Option<PageId>]) -> String {
    let verdict = if event.is_fault() { "FAULT" } else { "HIT" };
    format!("{:>3}: {}  {}", event.page, frame_row(frames), verdict)
}

/// Renders the run header, e.g. `=== LRU (frames=3) ===`.
pub fn run_header(policy: ReplacementPolicy, frame_count: u32) -> String {
    format!("=== {policy} (frames={frame_count}) ===")
}

/// Renders the run summary in the requested format.
pub fn render_summary(summary: &RunSummary, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => render_table(summary),
        OutputFormat::Json => render_json(summary, &[]),
        OutputFormat::Raw => render_raw(summary),
    }
}

/// Renders the summary plus the per-reference trace as a JSON document.
pub fn render_json(summary: &RunSummary, trace: &[AccessEvent]) -> String {
    #[derive(Serialize)]
    struct Report<'a> {
        summary: &'a RunSummary,
        #[serde(skip_serializing_if = "<[_]>::is_empty")]
        trace: &'a [AccessEvent],
    }

    serde_json::to_string_pretty(&Report { summary, trace }).unwrap_or_else(|_| "{}".to_string())
}

fn render_table(summary: &RunSummary) -> String {
    let mut table = Table::new();

    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .load_preset(comfy_table::presets::UTF8_FULL)
        .apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);

    table.set_header(vec![
        Cell::new("policy"),
        Cell::new("frames"),
        Cell::new("references"),
        Cell::new("hits"),
        Cell::new("faults"),
        Cell::new("fault rate"),
    ]);
    table.add_row(vec![
        Cell::new(summary.policy),
        Cell::new(summary.frame_count),
        Cell::new(summary.references),
        Cell::new(summary.hits),
        Cell::new(summary.faults),
        Cell::new(format!("{:.2}%", summary.fault_ratio * 100.0)),
    ]);

    table.to_string()
}

fn render_raw(summary: &RunSummary) -> String {
    format!(
        "Summary: refs={} hits={} faults={} fault_rate={:.2}%",
        summary.references,
        summary.hits,
        summary.faults,
        summary.fault_ratio * 100.0
    )
}
