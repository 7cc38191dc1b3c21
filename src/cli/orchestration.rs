//! Main workflow orchestration logic
//!
//! Runs one lineage build: enumerate tags, parse them, build the hierarchy
//! into a diagram and render it. Kept separate from `main.rs` so it can be
//! driven programmatically and from tests without clap.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::boundary::BoundaryWarning;
use crate::config::{Config, OutputFormat};
use crate::diagram::{Diagram, DiagramSink};
use crate::domain::TagPattern;
use crate::git::{Git2Repository, Repository};
use crate::hierarchy::{HierarchyBuilder, HierarchySummary};
use crate::ui;

/// Overrides for the lineage workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
/// Unset fields keep the value from the loaded configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineageWorkflowArgs {
    /// Repository to read tags from
    pub repo: Option<PathBuf>,

    /// Tag prefix regex fragment
    pub prefix: Option<String>,

    /// Directory the diagram is written to
    pub output_dir: Option<PathBuf>,

    /// Diagram format
    pub format: Option<OutputFormat>,
}

impl LineageWorkflowArgs {
    /// Apply the overrides on top of `config`
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(repo) = &self.repo {
            config.repo_path = repo.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.tag_prefix_pattern = prefix.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output.dir = dir.clone();
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        config
    }
}

/// Result of a successful lineage run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Number of tags in the repository
    pub total_tags: usize,

    /// Number of tags that followed the version convention
    pub parsed_tags: usize,

    /// Tags left out of the hierarchy
    pub rejected_tags: Vec<String>,

    /// Nodes and edges handed to the diagram
    pub summary: HierarchySummary,

    /// Rendered diagram file
    pub output_path: PathBuf,
}

/// Open the configured repository and run the workflow on it
pub fn run_lineage_workflow(args: &LineageWorkflowArgs, config: Config) -> Result<WorkflowResult> {
    let config = args.apply(config);

    let repo = Git2Repository::open(&config.repo_path).with_context(|| {
        format!(
            "Failed to open repository at '{}'",
            config.repo_path.display()
        )
    })?;

    run_with_repository(&repo, &config)
}

/// Run the workflow against any [Repository]
///
/// 1. Compile the tag pattern and check the output directory is safe to replace
/// 2. Enumerate and parse tags, reporting unsupported ones
/// 3. Build nodes, then edges, into a [Diagram]
/// 4. Render the diagram
pub fn run_with_repository<R: Repository>(repo: &R, config: &Config) -> Result<WorkflowResult> {
    let pattern = TagPattern::new(config.tag_prefix_pattern.as_str()).with_context(|| {
        format!(
            "Invalid tag prefix pattern '{}'",
            config.tag_prefix_pattern
        )
    })?;

    config
        .output
        .ensure_replaceable(&config.repo_path)
        .context("Refusing to replace output directory")?;

    let tags = repo.list_tags().context("Failed to list repository tags")?;
    tracing::info!(count = tags.len(), "tags enumerated");

    let scan = pattern.parse_all(tags.iter().map(|t| t.name.as_str()));
    for tag in &scan.rejected {
        ui::display_boundary_warning(&BoundaryWarning::UnsupportedTag { tag: tag.clone() });
    }
    if scan.accepted.is_empty() && !tags.is_empty() {
        ui::display_boundary_warning(&BoundaryWarning::NoVersionTags {
            total: tags.len(),
            prefix: pattern.prefix().to_string(),
        });
    }

    let versions = scan.versions();
    let mut diagram = Diagram::new();
    let summary = HierarchyBuilder::new(&mut diagram)
        .build(&versions)
        .context("Failed to build version hierarchy")?;

    ui::display_edges(&summary.edges);

    let output_path = diagram
        .render(&config.output)
        .context("Failed to render diagram")?;

    Ok(WorkflowResult {
        total_tags: tags.len(),
        parsed_tags: scan.accepted.len(),
        rejected_tags: scan.rejected,
        summary,
        output_path,
    })
}
