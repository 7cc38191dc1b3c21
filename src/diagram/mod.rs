//! Diagram sink abstraction
//!
//! The hierarchy builder only creates nodes and connects them; it never reads
//! rendered output back. [DiagramSink] is that seam. [Diagram] is the shipped
//! implementation, an in-memory petgraph graph written out as Graphviz DOT or
//! Mermaid.

mod render;

use crate::config::{OutputConfig, OutputFormat};
use crate::error::{Result, TagLineageError};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::fs;
use std::path::{Path, PathBuf};

/// Receiver of the version nodes and edges
pub trait DiagramSink {
    type NodeId: Copy;

    /// Add a node with the given label and return its handle
    fn create_node(&mut self, label: &str) -> Self::NodeId;

    /// Add a directed edge from `parent` to `child`
    fn connect(&mut self, parent: Self::NodeId, child: Self::NodeId);

    /// Write the diagram, returning the path of the written file
    fn render(&self, output: &OutputConfig) -> Result<PathBuf>;
}

/// Version lineage diagram backed by a petgraph directed graph
#[derive(Debug, Default)]
pub struct Diagram {
    graph: DiGraph<String, ()>,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Render the diagram to a string in the given format
    pub fn to_format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Dot => render::to_dot(&self.graph),
            OutputFormat::Mermaid => render::to_mermaid(&self.graph),
        }
    }
}

#[cfg(test)]
impl Diagram {
    /// Node labels in creation order
    pub(crate) fn node_labels(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .map(|idx| self.graph[idx].as_str())
            .collect()
    }

    /// Edges as (parent label, child label) in creation order
    pub(crate) fn edge_labels(&self) -> Vec<(&str, &str)> {
        self.graph
            .edge_references()
            .map(|edge| {
                (
                    self.graph[edge.source()].as_str(),
                    self.graph[edge.target()].as_str(),
                )
            })
            .collect()
    }
}

impl DiagramSink for Diagram {
    type NodeId = NodeIndex;

    fn create_node(&mut self, label: &str) -> NodeIndex {
        self.graph.add_node(label.to_string())
    }

    fn connect(&mut self, parent: NodeIndex, child: NodeIndex) {
        self.graph.add_edge(parent, child, ());
    }

    /// Deletes and recreates the output directory, then writes the diagram file.
    /// A directory containing the working directory is never deleted.
    fn render(&self, output: &OutputConfig) -> Result<PathBuf> {
        output.ensure_replaceable(Path::new("."))?;

        let render_err = |action: &str, path: &PathBuf, e: std::io::Error| {
            TagLineageError::render(format!("Cannot {} '{}': {}", action, path.display(), e))
        };

        if output.dir.exists() {
            fs::remove_dir_all(&output.dir).map_err(|e| render_err("remove", &output.dir, e))?;
        }
        fs::create_dir_all(&output.dir).map_err(|e| render_err("create", &output.dir, e))?;

        let path = output.file_path();
        fs::write(&path, self.to_format(output.format))
            .map_err(|e| render_err("write", &path, e))?;

        tracing::debug!(
            path = %path.display(),
            format = %output.format,
            nodes = self.node_count(),
            edges = self.edge_count(),
            "diagram written"
        );
        Ok(path)
    }
}
