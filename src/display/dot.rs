//! dot.rs
//! Graphviz export for the visualization layer.

use crate::store::RelationGraph;
use petgraph::dot::Dot;
use petgraph::graph::DiGraph;

/// Renders the graph as a DOT digraph labelled with predicates.
///
/// Every edge is drawn with an arrowhead. Directed edges point away from the
/// first argument of their expression; undirected edges keep storage order.
/// Isolated nodes are included.
pub fn to_dot(graph: &RelationGraph) -> String {
    let mut drawing: DiGraph<&str, String> = DiGraph::new();
    let ids: Vec<_> = graph.nodes().map(|name| drawing.add_node(name)).collect();

    for edge in graph.edges() {
        let (Some(from), Some(to)) = (graph.node_id(&edge.source), graph.node_id(&edge.target)) else {
            continue;
        };
        drawing.add_edge(ids[from.index()], ids[to.index()], edge.predicate);
    }

    format!("{}", Dot::new(&drawing))
}
