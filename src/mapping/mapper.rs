//! mapper.rs
//! Interprets `(predicate arg1 ... argN)` expressions as graph edges.

use crate::parse::Expr;
use crate::store::{Directionality, NodeId, Orientation, Relation, RelationGraph, RuleSet};
use smallvec::SmallVec;
use tracing::trace;

/// Applies one top-level expression to a graph under a fixed rule table.
#[derive(Debug, Clone, Copy)]
pub struct RelationMapper<'r> {
    rules: &'r RuleSet,
}

impl<'r> RelationMapper<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'r RuleSet {
        self.rules
    }

    /// Mutates `graph` according to `expr`. Never fails.
    ///
    /// - a bare atom becomes an isolated node;
    /// - an empty list does nothing;
    /// - otherwise element 0 is the predicate and the atom elements after it are
    ///   arguments. Nested lists among the arguments are skipped.
    pub fn apply(&self, expr: &Expr, graph: &mut RelationGraph) {
        let items = match expr {
            Expr::Atom(name) => {
                graph.add_node(name);
                return;
            }
            Expr::List(items) if items.is_empty() => return,
            Expr::List(items) => items,
        };

        // A list in predicate position never matches an override key, so it takes
        // the default rule.
        let dir = match &items[0] {
            Expr::Atom(p) => self.rules.directionality(p),
            Expr::List(_) => self.rules.default,
        };

        let args: SmallVec<[NodeId; 8]> = items[1..]
            .iter()
            .filter_map(Expr::as_atom)
            .map(|name| graph.add_node(name))
            .collect();

        trace!(
            predicate = items[0].as_atom().unwrap_or("<list>"),
            arity = args.len(),
            directionality = %dir,
            "mapping expression"
        );

        if args.len() < 2 {
            return;
        }

        // Rendered once; a list predicate is labelled with its parenthesized form.
        let predicate: String = match &items[0] {
            Expr::Atom(p) => p.clone(),
            nested => nested.to_string(),
        };

        match dir {
            Directionality::Undirected => {
                for (i, &a) in args.iter().enumerate() {
                    for &b in &args[i + 1..] {
                        graph.connect(a, b, Relation {
                            predicate: predicate.clone(),
                            orientation: Orientation::Undirected,
                        });
                    }
                }
            }
            Directionality::Directed => {
                let source = args[0];
                for &target in &args[1..] {
                    graph.connect(source, target, Relation {
                        predicate: predicate.clone(),
                        orientation: Orientation::Directed { from: source },
                    });
                }
            }
        }
    }
}
