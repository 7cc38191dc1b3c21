//! Version hierarchy construction
//!
//! Turns parsed version tuples into a deduplicated lineage graph in two passes
//! over the same tuples:
//!
//! 1. every canonical node (`major.minor`, `major.minor.patch`,
//!    `major.minor.patch-release`, leaf) is created once;
//! 2. parent→child edges are drawn between the levels each tuple specifies,
//!    plus a `major.minor` → leaf edge for every tuple.
//!
//! Nodes are keyed by canonical identifier and edges by the ordered
//! (parent, child) identifier pair.

use crate::diagram::DiagramSink;
use crate::domain::VersionTuple;
use crate::error::{Result, TagLineageError};
use std::collections::{HashMap, HashSet};

/// Nodes and edges produced by one build, in creation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchySummary {
    pub nodes: Vec<String>,
    pub edges: Vec<(String, String)>,
}

/// Builds the lineage graph into a [DiagramSink].
///
/// Owns the dedup state for a single run; drop it (or call
/// [HierarchyBuilder::into_summary]) once the sink has everything.
pub struct HierarchyBuilder<'s, S: DiagramSink> {
    sink: &'s mut S,
    node_index: HashMap<String, S::NodeId>,
    seen_edges: HashSet<(String, String)>,
    summary: HierarchySummary,
}

impl<'s, S: DiagramSink> HierarchyBuilder<'s, S> {
    pub fn new(sink: &'s mut S) -> Self {
        HierarchyBuilder {
            sink,
            node_index: HashMap::new(),
            seen_edges: HashSet::new(),
            summary: HierarchySummary::default(),
        }
    }

    /// Run both passes over `versions` and return what was created
    pub fn build(mut self, versions: &[VersionTuple]) -> Result<HierarchySummary> {
        self.materialize_nodes(versions);
        self.connect_edges(versions)?;

        tracing::info!(
            versions = versions.len(),
            nodes = self.summary.nodes.len(),
            edges = self.summary.edges.len(),
            "version hierarchy built"
        );
        Ok(self.into_summary())
    }

    /// Pass 1: create every node each tuple needs, coarsest level first
    pub fn materialize_nodes(&mut self, versions: &[VersionTuple]) {
        for version in versions {
            self.ensure_node(version.minor_id());
            self.ensure_node(version.patch_id());
            // same as the patch id when there is no release label
            self.ensure_node(version.release_id());
            self.ensure_node(version.leaf_id());
        }
    }

    /// Pass 2: connect each tuple's leaf to the coarser levels it specifies.
    ///
    /// Every identifier must already exist from [Self::materialize_nodes]
    /// over the same tuples.
    pub fn connect_edges(&mut self, versions: &[VersionTuple]) -> Result<()> {
        for version in versions {
            let leaf = version.leaf_id();

            if version.has_pre() {
                self.ensure_edge(version.pre_parent_id(), leaf.clone())?;
            }
            if version.has_release() {
                self.ensure_edge(version.patch_id(), version.release_id())?;
            }
            self.ensure_edge(version.minor_id(), leaf)?;
        }
        Ok(())
    }

    pub fn into_summary(self) -> HierarchySummary {
        self.summary
    }

    fn ensure_node(&mut self, id: String) {
        if self.node_index.contains_key(&id) {
            return;
        }

        let node = self.sink.create_node(&id);
        tracing::debug!(node = %id, "node created");
        self.node_index.insert(id.clone(), node);
        self.summary.nodes.push(id);
    }

    fn ensure_edge(&mut self, parent: String, child: String) -> Result<()> {
        let pair = (parent, child);
        if self.seen_edges.contains(&pair) {
            return Ok(());
        }

        let lookup = |id: &str| {
            self.node_index.get(id).copied().ok_or_else(|| {
                TagLineageError::hierarchy(format!("edge references unknown node '{}'", id))
            })
        };
        let parent_node = lookup(&pair.0)?;
        let child_node = lookup(&pair.1)?;

        self.sink.connect(parent_node, child_node);
        tracing::debug!(parent = %pair.0, child = %pair.1, "edge created");
        self.seen_edges.insert(pair.clone());
        self.summary.edges.push(pair);
        Ok(())
    }
}
