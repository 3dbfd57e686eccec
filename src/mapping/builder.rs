//! builder.rs
//! Owns the graph while expressions are being ingested.

use super::mapper::RelationMapper;
use crate::parse::{self, Expr, ParseError, ParsedDocument};
use crate::store::{RelationGraph, RuleSet};
use tracing::debug;

/// Accumulates expressions into a fresh graph under one rule table.
///
/// One builder serves one analysis; state only grows, so it is never reused
/// across unrelated documents. Call [`GraphBuilder::finish`] to obtain the
/// read-only graph for analysis.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    rules: RuleSet,
    graph: RelationGraph,
}

impl GraphBuilder {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules, graph: RelationGraph::new() }
    }

    pub fn rules(&self) -> &RuleSet { &self.rules }

    /// Replaces the rule table. Edges that already exist are left as built.
    pub fn set_rules(&mut self, rules: RuleSet) {
        self.rules = rules;
    }

    pub fn rules_mut(&mut self) -> &mut RuleSet { &mut self.rules }

    pub fn graph(&self) -> &RelationGraph { &self.graph }

    pub fn process(&mut self, expr: &Expr) {
        RelationMapper::new(&self.rules).apply(expr, &mut self.graph);
    }

    pub fn process_all<'e>(&mut self, exprs: impl IntoIterator<Item = &'e Expr>) {
        let mapper = RelationMapper::new(&self.rules);
        for expr in exprs {
            mapper.apply(expr, &mut self.graph);
        }
    }

    /// Parses `text` leniently and maps every resulting expression.
    pub fn ingest(&mut self, text: &str) -> ParsedDocument {
        let doc = parse::parse(text);
        self.process_all(&doc.expressions);
        debug!(
            tokens = doc.token_count,
            expressions = doc.expressions.len(),
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "ingested document"
        );
        doc
    }

    /// Parses `text` strictly; on error the graph is left untouched.
    pub fn ingest_strict(&mut self, text: &str) -> Result<usize, ParseError> {
        let exprs = parse::parse_strict(text)?;
        self.process_all(&exprs);
        Ok(exprs.len())
    }

    pub fn finish(self) -> RelationGraph {
        self.graph
    }
}
