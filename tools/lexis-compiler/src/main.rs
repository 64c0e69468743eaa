mod assemble;
mod document;
mod report;

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};
use clap::{ArgAction, Parser, ValueEnum};
use lexis_protocol::AnchorTable;
use lexis_xref::{validate, CrossReferenceGraph};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::document::DictionaryDocument;
use crate::report::{Markers, Report};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Pretty JSON report with spans and highlighted examples
    Json,
    /// rkyv anchor table for zero-copy loading
    Rkyv,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Anchors headword forms in dictionary examples and exports them")]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Marker inserted before each anchored form in the JSON report
    #[arg(long, default_value = "**")]
    open: String,

    /// Marker inserted after each anchored form in the JSON report
    #[arg(long, default_value = "**")]
    close: String,

    /// Fail when a cross-reference does not resolve
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    info!(input = %cli.input.display(), "reading dictionary");
    let input_data = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let doc: DictionaryDocument = serde_json::from_str(&input_data)
        .with_context(|| format!("failed to parse {}", cli.input.display()))?;

    let entries = assemble::assemble(doc)?;
    info!(entries = entries.len(), "entries assembled");

    let graph = CrossReferenceGraph::from_entries(entries.iter().map(|(_, entry)| entry));
    let dangling = validate(&graph);
    if !dangling.is_empty() {
        if cli.strict {
            bail!("{} unresolved cross-reference(s), first: {}", dangling.len(), dangling[0]);
        }
        warn!(count = dangling.len(), "unresolved cross-references");
    }

    match cli.format {
        Format::Json => {
            let markers = Markers {
                open: cli.open,
                close: cli.close,
            };
            let report = Report::build(&entries, &markers);
            let json = serde_json::to_string_pretty(&report)?;
            fs::write(&cli.output, json)
                .with_context(|| format!("failed to write {}", cli.output.display()))?;
        }
        Format::Rkyv => {
            let records = entries
                .iter()
                .flat_map(|(id, entry)| entry.anchor_records(*id))
                .collect();
            let table = AnchorTable::new(records);
            let bytes = rkyv::to_bytes::<_, 1024>(&table)
                .map_err(|e| anyhow!("failed to serialize anchor table: {e:?}"))?;
            fs::write(&cli.output, &bytes)
                .with_context(|| format!("failed to write {}", cli.output.display()))?;
        }
    }

    info!(output = %cli.output.display(), "done");
    Ok(())
}
