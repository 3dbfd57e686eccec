//! Graph state and the rule table that shapes it.
pub mod graph;
pub mod rules;
pub mod types;

pub use graph::{EdgeView, RelationGraph};
pub use rules::{ConfigError, RuleConfig, RulePatch, RuleSet};
pub use types::{Directionality, NodeId, Orientation, Relation};
