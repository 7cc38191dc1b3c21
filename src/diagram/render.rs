use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;
use std::fmt::Write;

fn escape_dot(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Graphviz DOT, one statement per node and per edge
pub(super) fn to_dot(graph: &DiGraph<String, ()>) -> String {
    let mut out = String::new();
    out.push_str("digraph lineage {\n");

    for idx in graph.node_indices() {
        let _ = writeln!(out, "  \"{}\";", escape_dot(&graph[idx]));
    }
    for edge in graph.edge_references() {
        let _ = writeln!(
            out,
            "  \"{}\" -> \"{}\";",
            escape_dot(&graph[edge.source()]),
            escape_dot(&graph[edge.target()])
        );
    }

    out.push_str("}\n");
    out
}

/// Mermaid flowchart, node ids are graph indices since labels contain `.` and `-`
pub(super) fn to_mermaid(graph: &DiGraph<String, ()>) -> String {
    let mut out = String::from("graph LR\n");

    for idx in graph.node_indices() {
        let _ = writeln!(
            out,
            "  n{}[\"{}\"]",
            idx.index(),
            graph[idx].replace('"', "#quot;")
        );
    }
    for edge in graph.edge_references() {
        let _ = writeln!(
            out,
            "  n{} --> n{}",
            edge.source().index(),
            edge.target().index()
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> DiGraph<String, ()> {
        let mut graph = DiGraph::new();
        let a = graph.add_node("2.0".to_string());
        let b = graph.add_node("2.0.0-beta".to_string());
        graph.add_edge(a, b, ());
        graph
    }

    #[test]
    fn test_to_dot() {
        let dot = to_dot(&graph());
        assert!(dot.starts_with("digraph lineage {"));
        assert!(dot.contains("  \"2.0\";\n"));
        assert!(dot.contains("  \"2.0\" -> \"2.0.0-beta\";\n"));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn test_to_mermaid() {
        let mermaid = to_mermaid(&graph());
        assert!(mermaid.starts_with("graph LR\n"));
        assert!(mermaid.contains("  n0[\"2.0\"]\n"));
        assert!(mermaid.contains("  n0 --> n1\n"));
    }

    #[test]
    fn test_escape_dot() {
        assert_eq!(escape_dot(r#"a"b\c"#), r#"a\"b\\c"#);
    }

    #[test]
    fn test_empty_graph() {
        let graph = DiGraph::<String, ()>::new();
        assert_eq!(to_dot(&graph), "digraph lineage {\n}\n");
        assert_eq!(to_mermaid(&graph), "graph LR\n");
    }
}
