//! Pure formatting functions for UI output.
//!
//! `format_*` functions build the text and are testable; `display_*`
//! functions print it.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::cli::orchestration::WorkflowResult;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning on stdout.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    println!("{} {}", style("⚠").yellow(), warning);
}

/// Format the edge list as `parent -> child` lines.
pub fn format_edges(edges: &[(String, String)]) -> String {
    edges
        .iter()
        .map(|(parent, child)| format!("  {} -> {}", parent, child))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Display the edge list of the built hierarchy.
pub fn display_edges(edges: &[(String, String)]) {
    println!("{}", style(format!("Edges ({}):", edges.len())).bold());
    if !edges.is_empty() {
        println!("{}", format_edges(edges));
    }
}

/// Format the one-line outcome of a run.
pub fn format_run_summary(result: &WorkflowResult) -> String {
    format!(
        "{} of {} tags parsed, {} nodes, {} edges -> {}",
        result.parsed_tags,
        result.total_tags,
        result.summary.nodes.len(),
        result.summary.edges.len(),
        result.output_path.display()
    )
}

/// Display the outcome of a run.
pub fn display_run_summary(result: &WorkflowResult) {
    display_success(&format_run_summary(result));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::HierarchySummary;
    use std::path::PathBuf;

    #[test]
    fn test_format_edges() {
        let edges = vec![
            ("1.2".to_string(), "1.2.3".to_string()),
            ("2.0.0".to_string(), "2.0.0-beta".to_string()),
        ];
        assert_eq!(
            format_edges(&edges),
            "  1.2 -> 1.2.3\n  2.0.0 -> 2.0.0-beta"
        );
        assert_eq!(format_edges(&[]), "");
    }

    #[test]
    fn test_format_run_summary() {
        let result = WorkflowResult {
            total_tags: 3,
            parsed_tags: 2,
            rejected_tags: vec!["junk".to_string()],
            summary: HierarchySummary {
                nodes: vec!["1.2".to_string(), "1.2.3".to_string()],
                edges: vec![("1.2".to_string(), "1.2.3".to_string())],
            },
            output_path: PathBuf::from("tag-lineage/lineage.dot"),
        };
        assert_eq!(
            format_run_summary(&result),
            "2 of 3 tags parsed, 2 nodes, 1 edges -> tag-lineage/lineage.dot"
        );
    }

    #[test]
    fn test_display_status() {
        // Visual verification test - output is printed to stdout
        display_status("test status");
    }
}
