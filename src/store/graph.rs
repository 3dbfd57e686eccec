//! graph.rs
//! Undirected relation graph keyed by entity name.

use super::types::{NodeId, Orientation, Relation};
use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Flattened edge record handed to presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeView {
    pub source: String,
    pub target: String,
    pub predicate: String,
    /// True when `source` is the first argument of a directed predicate.
    pub directed: bool,
}

/// Node set plus labelled edge set, built up across expressions.
///
/// Adding a node that already exists, or an edge between a pair that is already
/// connected, never grows the graph; a repeated edge only has its label overwritten.
#[derive(Debug, Clone, Default)]
pub struct RelationGraph {
    pub(crate) graph: UnGraph<String, Relation>,
    index: HashMap<String, NodeId>,
}

impl RelationGraph {
    pub fn new() -> Self { Self::default() }

    pub fn node_count(&self) -> usize { self.graph.node_count() }
    pub fn edge_count(&self) -> usize { self.graph.edge_count() }
    pub fn is_empty(&self) -> bool { self.graph.node_count() == 0 }

    /// Registers `name`, returning the existing id when already present.
    pub fn add_node(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.graph.add_node(name.to_string());
        self.index.insert(name.to_string(), id);
        id
    }

    /// Connects `a` and `b`, overwriting the label if they are already connected.
    pub fn connect(&mut self, a: NodeId, b: NodeId, relation: Relation) {
        self.graph.update_edge(a, b, relation);
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// `id` must come from this graph.
    pub(crate) fn name(&self, id: NodeId) -> &str {
        &self.graph[id]
    }

    /// Node names in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph.node_indices().map(move |id| self.graph[id].as_str())
    }

    /// Incident edge count; a self-loop counts twice.
    pub fn degree(&self, id: NodeId) -> usize {
        self.graph.edges(id).map(|e| if e.source() == e.target() { 2 } else { 1 }).sum()
    }

    /// The relation between two named nodes, if they are connected.
    pub fn relation(&self, a: &str, b: &str) -> Option<&Relation> {
        let (a, b) = (self.node_id(a)?, self.node_id(b)?);
        let edge = self.graph.find_edge(a, b)?;
        self.graph.edge_weight(edge)
    }

    pub fn edges(&self) -> Vec<EdgeView> {
        self.graph
            .edge_references()
            .map(|e| {
                let (mut source, mut target) = (e.source(), e.target());
                let rel = e.weight();
                let directed = match rel.orientation {
                    Orientation::Directed { from } => {
                        if from == target {
                            std::mem::swap(&mut source, &mut target);
                        }
                        true
                    }
                    Orientation::Undirected => false,
                };
                EdgeView {
                    source: self.graph[source].clone(),
                    target: self.graph[target].clone(),
                    predicate: rel.predicate.clone(),
                    directed,
                }
            })
            .collect()
    }
}
