use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique, stable identifier for an entity within the graph.
pub type NodeId = NodeIndex;

/// How a predicate fans its arguments out into edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Directionality {
    /// Every unordered pair of arguments is connected.
    Undirected,
    /// The first argument is connected to each of the others.
    Directed,
}

impl Directionality {
    /// Recognizes exactly `undirected` and `directed`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "undirected" => Some(Self::Undirected),
            "directed" => Some(Self::Directed),
            _ => None,
        }
    }

    /// Anything other than `undirected` is treated as `directed`.
    pub fn parse_lenient(value: &str) -> Self {
        if value == "undirected" { Self::Undirected } else { Self::Directed }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Undirected => "undirected",
            Self::Directed => "directed",
        }
    }
}

impl Default for Directionality {
    fn default() -> Self { Self::Undirected }
}

impl fmt::Display for Directionality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which way an edge was generated. Connectivity analysis ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Undirected,
    Directed { from: NodeId },
}

/// The attribute carried by every edge: the predicate that created it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Relation {
    pub predicate: String,
    pub orientation: Orientation,
}
