//! Value types for connectivity results.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSummary {
    /// 1-based, in order of discovery.
    pub id: usize,
    pub size: usize,
    /// Member names, sorted lexicographically.
    pub nodes: Vec<String>,
}

/// Snapshot of a graph's connectivity. Holds no reference to the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectivityReport {
    pub total_nodes: usize,
    pub connected_components: usize,
    pub largest_component_size: usize,
    /// Nodes without incident edges, in node insertion order.
    pub orphan_nodes: Vec<String>,
    /// Component size -> number of components of that size.
    pub component_size_distribution: BTreeMap<usize, usize>,
    pub components: Vec<ComponentSummary>,
}

impl ConnectivityReport {
    pub fn is_empty(&self) -> bool {
        self.total_nodes == 0
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
