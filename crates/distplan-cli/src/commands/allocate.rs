//! `distplan allocate` — read both lists, run the placement, write the plan.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use distplan_core::{AssignmentRecord, DistplanConfig, OutputFormat, read_records};
use distplan_placement::{AllocationPlan, Item, plan_to_assignments, record_to_container, record_to_item};
use tracing::info;

/// Raw command-line values; `None` falls back to the config file.
#[derive(Debug, Default)]
pub struct AllocateArgs {
    pub files: Option<PathBuf>,
    pub nodes: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: Option<String>,
    pub unassigned: Option<String>,
    pub summary: bool,
    pub config: Option<PathBuf>,
}

/// Effective settings after merging flags over distplan.toml.
#[derive(Debug)]
struct Settings {
    files: PathBuf,
    nodes: PathBuf,
    output: Option<PathBuf>,
    format: OutputFormat,
    unassigned_marker: String,
    summary: bool,
}

impl Settings {
    fn resolve(args: AllocateArgs) -> Result<Self> {
        let config = match &args.config {
            Some(path) => DistplanConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => DistplanConfig::default(),
        };

        let files = args
            .files
            .or_else(|| config.files().map(PathBuf::from))
            .ok_or_else(|| anyhow!("Input missing: file with file names not specified (use -f)"))?;
        let nodes = args
            .nodes
            .or_else(|| config.nodes().map(PathBuf::from))
            .ok_or_else(|| anyhow!("Input missing: file with nodes not specified (use -n)"))?;

        let format = match args.format.as_deref() {
            Some(f) => OutputFormat::parse(f)?,
            None => config.format(),
        };

        Ok(Settings {
            files,
            nodes,
            output: args.output.or_else(|| config.output_path().map(PathBuf::from)),
            format,
            unassigned_marker: args
                .unassigned
                .unwrap_or_else(|| config.unassigned_marker().to_string()),
            summary: args.summary || config.summary(),
        })
    }
}

/// Run the `allocate` command.
pub fn allocate(args: AllocateArgs) -> Result<()> {
    let settings = Settings::resolve(args)?;
    run(&settings).map(|_| ())
}

fn run(settings: &Settings) -> Result<AllocationPlan> {
    let node_records = read_records(&settings.nodes)?;
    let file_records = read_records(&settings.files)?;
    info!(
        files = file_records.len(),
        nodes = node_records.len(),
        "loaded input lists"
    );

    // Open the destination before doing any work so a bad path fails fast.
    let mut out: Box<dyn Write> = match &settings.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Cannot open output file: {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    let items: Vec<Item> = file_records.iter().map(record_to_item).collect();
    let containers = node_records.iter().map(record_to_container).collect();

    let plan = distplan_placement::allocate(&items, containers);
    let assignments = plan_to_assignments(&items, &plan);

    write_assignments(&mut out, &assignments, settings.format, &settings.unassigned_marker)?;
    out.flush()?;

    if settings.summary {
        for usage in plan.node_usage() {
            info!(
                node = %usage.name,
                capacity = usage.capacity,
                occupied = usage.occupied,
                free = usage.free,
                "node usage"
            );
        }
    }

    Ok(plan)
}

fn write_assignments<W: Write>(
    out: &mut W,
    assignments: &[AssignmentRecord],
    format: OutputFormat,
    unassigned_marker: &str,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for assignment in assignments {
                writeln!(out, "{}", assignment.to_line(unassigned_marker))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, assignments)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
