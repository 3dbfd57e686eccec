//! Relation-graph connectivity analysis for symbolic-expression documents.
//!
//! Text flows through four stages: [`parse`] turns it into nested expressions,
//! [`mapping`] turns each `(predicate arg ...)` expression into graph edges under a
//! [`RuleSet`], [`store`] holds the resulting graph, and [`analysis`] summarizes its
//! connectivity. [`display`] renders reports and DOT output for presentation layers.

pub mod analysis;
pub mod batch;
pub mod display;
pub mod error;
pub mod mapping;
pub mod parse;
pub mod store;

#[cfg(feature = "python")]
pub mod bindings;

pub use analysis::{analyze_connectivity, ComponentSummary, ConnectivityReport};
pub use batch::{analyze_batch, analyze_batch_strict};
pub use error::{AnalyzerError, Result};
pub use mapping::{GraphBuilder, RelationMapper};
pub use parse::{Expr, ParseError, ParsedDocument};
pub use store::{ConfigError, Directionality, EdgeView, RelationGraph, RuleConfig, RuleSet};

/// Parses `text` leniently into a fresh graph and reports its connectivity.
pub fn analyze(text: &str, rules: &RuleSet) -> ConnectivityReport {
    let mut builder = GraphBuilder::new(rules.clone());
    builder.ingest(text);
    analyze_connectivity(builder.graph())
}

/// Strict pipeline: unbalanced parentheses are rejected instead of tolerated.
pub fn analyze_strict(text: &str, rules: &RuleSet) -> Result<ConnectivityReport> {
    let mut builder = GraphBuilder::new(rules.clone());
    builder.ingest_strict(text)?;
    Ok(analyze_connectivity(builder.graph()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn scenario_rules() -> RuleSet {
        RuleSet::new(Directionality::Undirected)
            .with_predicate("causes", Directionality::Directed)
            .with_predicate("related_to", Directionality::Undirected)
    }

    #[test]
    fn test_end_to_end_scenario() {
        let text = "(causes rain flood) (related_to flood damage) isolated_node";
        let mut builder = GraphBuilder::new(scenario_rules());
        builder.ingest(text);
        let graph = builder.finish();

        let mut nodes: Vec<&str> = graph.nodes().collect();
        nodes.sort();
        assert_eq!(nodes, vec!["damage", "flood", "isolated_node", "rain"]);

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.relation("rain", "flood").unwrap().predicate, "causes");
        assert_eq!(graph.relation("flood", "damage").unwrap().predicate, "related_to");

        let report = analyze_connectivity(&graph);
        assert_eq!(report.total_nodes, 4);
        assert_eq!(report.connected_components, 2);
        assert_eq!(report.largest_component_size, 3);
        assert_eq!(report.orphan_nodes, vec!["isolated_node"]);
        assert_eq!(
            report.components,
            vec![
                ComponentSummary { id: 1, size: 3, nodes: vec!["damage".into(), "flood".into(), "rain".into()] },
                ComponentSummary { id: 2, size: 1, nodes: vec!["isolated_node".into()] },
            ]
        );
        assert_eq!(report.component_size_distribution, BTreeMap::from([(1, 1), (3, 1)]));
    }

    #[test]
    fn test_unmatched_open_does_not_fail() {
        let report = analyze("(a (b)", &RuleSet::standard());
        assert_eq!(report.total_nodes, 1);
        assert!(analyze_strict("(a (b)", &RuleSet::standard()).is_err());
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = analyze("(related_to x y) z", &RuleSet::standard());
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["total_nodes"], 3);
        assert_eq!(value["orphan_nodes"][0], "z");
        assert_eq!(value["component_size_distribution"]["2"], 1);
    }

    #[test]
    fn test_json_rules_drive_pipeline() {
        let rules = RuleSet::from_json(r#"{"default": "directed"}"#).unwrap();
        let report = analyze("(hub a b c)", &rules);
        assert_eq!(report.connected_components, 1);
        assert!(report.orphan_nodes.is_empty());
    }
}
