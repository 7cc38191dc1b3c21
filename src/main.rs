use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::FmtSubscriber;

use tag_lineage::cli::orchestration::{run_lineage_workflow, LineageWorkflowArgs};
use tag_lineage::config::{self, OutputFormat};
use tag_lineage::ui;

#[derive(clap::Parser)]
#[command(
    name = "tag-lineage",
    version,
    about = "Render the version lineage of a repository's release tags as a diagram"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Repository to read tags from")]
    repo: Option<PathBuf>,

    #[arg(short, long, help = "Tag prefix pattern (regex) before major.minor.patch")]
    prefix: Option<String>,

    #[arg(short, long, help = "Directory the diagram is written to (recreated on every run)")]
    output_dir: Option<PathBuf>,

    #[arg(short, long, value_enum, help = "Diagram format")]
    format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,

    #[arg(short, long, help = "Only log errors")]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.quiet {
        Level::ERROR
    } else if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    // RUST_LOG directives take precedence over -v/-q
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(log_level).into())
        .from_env_lossy();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {}", e);
    }

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:?}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref()).context("Error loading config")?;

    let workflow_args = LineageWorkflowArgs {
        repo: args.repo,
        prefix: args.prefix,
        output_dir: args.output_dir,
        format: args.format,
    };

    ui::display_status("Reading repository tags...");
    let result = run_lineage_workflow(&workflow_args, config)?;
    ui::display_run_summary(&result);

    Ok(())
}
