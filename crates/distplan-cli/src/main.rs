use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "distplan",
    about = "distplan — distribute files across capacity-bounded nodes",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign every file to a node, largest files first.
    ///
    /// Each file goes to the least-loaded node that still has room.
    /// Files that fit nowhere are reported with the unassigned marker.
    Allocate {
        /// Input file with the list of files (`<name> <size>` per line)
        #[arg(short, long)]
        files: Option<PathBuf>,
        /// Input file with the list of nodes (`<name> <capacity>` per line)
        #[arg(short, long)]
        nodes: Option<PathBuf>,
        /// Output file (default: standard output)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format: text or json
        #[arg(long)]
        format: Option<String>,
        /// Marker written for files that fit nowhere (default: NULL)
        #[arg(long)]
        unassigned: Option<String>,
        /// Log per-node usage after allocation
        #[arg(long)]
        summary: bool,
        /// Read defaults from a distplan.toml
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Generate a distplan.toml scaffold
    Init {
        #[arg(short, long, default_value = ".")]
        path: String,
        /// Path of the file list to reference
        #[arg(long, default_value = "files.txt")]
        files: String,
        /// Path of the node list to reference
        #[arg(long, default_value = "nodes.txt")]
        nodes: String,
        /// Overwrite an existing distplan.toml
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("distplan=info".parse()?)
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Allocate {
            files,
            nodes,
            output,
            format,
            unassigned,
            summary,
            config,
        } => commands::allocate::allocate(commands::allocate::AllocateArgs {
            files,
            nodes,
            output,
            format,
            unassigned,
            summary,
            config,
        }),
        Commands::Init {
            path,
            files,
            nodes,
            force,
        } => commands::init::init(&path, &files, &nodes, force),
    }
}
