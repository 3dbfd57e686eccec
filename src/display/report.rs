use crate::analysis::ConnectivityReport;
use std::fmt::Write;

/// Renders a report as the plain-text equivalent of the analyzer's results page.
pub fn format_report(report: &ConnectivityReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ANALYSIS RESULTS");
    let _ = writeln!(out, "--------------------------------------------------");
    let _ = writeln!(out, "Total nodes: {}", report.total_nodes);
    let _ = writeln!(out, "Connected components: {}", report.connected_components);
    let _ = writeln!(out, "Largest component size: {}", report.largest_component_size);

    let _ = writeln!(out, "\nComponent Size Distribution");
    for (size, count) in &report.component_size_distribution {
        let _ = writeln!(out, "  Size {}: {} component(s)", size, count);
    }

    let _ = writeln!(out, "\nOrphan Nodes");
    if report.orphan_nodes.is_empty() {
        let _ = writeln!(out, "  No orphan nodes found");
    } else {
        let _ = writeln!(out, "  {}", report.orphan_nodes.join(", "));
    }

    let _ = writeln!(out, "\nDetailed Components");
    for component in &report.components {
        let _ = writeln!(out, "  Component {} (size={})", component.id, component.size);
        let _ = writeln!(out, "    {}", component.nodes.join(", "));
    }
    out
}
