use super::report::{ComponentSummary, ConnectivityReport};
use crate::store::{NodeId, RelationGraph};
use std::collections::{BTreeMap, VecDeque};
use tracing::debug;

/// Computes components, orphans and the size histogram of `graph`.
///
/// Reachability is undirected regardless of how an edge was generated. Components
/// are numbered in the order their first node was inserted into the graph.
pub fn analyze_connectivity(graph: &RelationGraph) -> ConnectivityReport {
    let components = components(graph);

    let orphan_nodes: Vec<String> = graph
        .graph
        .node_indices()
        .filter(|&id| graph.degree(id) == 0)
        .map(|id| graph.name(id).to_string())
        .collect();

    let mut distribution = BTreeMap::new();
    let mut summaries = Vec::with_capacity(components.len());
    for (i, members) in components.into_iter().enumerate() {
        let size = members.len();
        *distribution.entry(size).or_insert(0) += 1;

        let mut nodes: Vec<String> = members.into_iter().map(|id| graph.name(id).to_string()).collect();
        nodes.sort();
        summaries.push(ComponentSummary { id: i + 1, size, nodes });
    }

    let report = ConnectivityReport {
        total_nodes: graph.node_count(),
        connected_components: summaries.len(),
        largest_component_size: summaries.iter().map(|c| c.size).max().unwrap_or(0),
        orphan_nodes,
        component_size_distribution: distribution,
        components: summaries,
    };
    debug!(
        nodes = report.total_nodes,
        components = report.connected_components,
        orphans = report.orphan_nodes.len(),
        "analyzed connectivity"
    );
    report
}

/// Breadth-first partition of the node set, seeded in insertion order.
fn components(graph: &RelationGraph) -> Vec<Vec<NodeId>> {
    let inner = &graph.graph;
    let mut visited = vec![false; inner.node_count()];
    let mut result = Vec::new();
    let mut queue = VecDeque::new();

    for start in inner.node_indices() {
        if visited[start.index()] {
            continue;
        }
        visited[start.index()] = true;
        queue.push_back(start);

        let mut members = Vec::new();
        while let Some(node) = queue.pop_front() {
            members.push(node);
            for next in inner.neighbors(node) {
                if !visited[next.index()] {
                    visited[next.index()] = true;
                    queue.push_back(next);
                }
            }
        }
        result.push(members);
    }
    result
}
