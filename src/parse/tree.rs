//! tree.rs
//! Stack-based assembly of tokens into nested expressions.

use super::error::ParseError;
use super::tokenizer::{strip_comments, tokenize, Token, TokenKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// A parsed unit: either an atom or an ordered list of sub-expressions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expr {
    Atom(String),
    List(Vec<Expr>),
}

impl Expr {
    pub fn atom(s: impl Into<String>) -> Self {
        Expr::Atom(s.into())
    }

    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Expr::Atom(a) => Some(a),
            Expr::List(_) => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Expr::List(_))
    }
}

/// Frees nested lists with a work stack, so dropping a deep tree uses constant stack.
impl Drop for Expr {
    fn drop(&mut self) {
        let Expr::List(items) = self else { return };
        if !items.iter().any(Expr::is_list) {
            return;
        }
        let mut pending = std::mem::take(items);
        while let Some(mut expr) = pending.pop() {
            if let Expr::List(children) = &mut expr {
                pending.append(children);
            }
        }
    }
}

/// Renders the expression back in parenthesized form, e.g. `(a (b c))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items = match self {
            Expr::Atom(a) => return f.write_str(a),
            Expr::List(items) => items,
        };

        // One frame per open list: remaining children, and whether one was written.
        f.write_str("(")?;
        let mut frames = vec![(items.iter(), false)];
        while let Some((children, started)) = frames.last_mut() {
            let Some(next) = children.next() else {
                frames.pop();
                f.write_str(")")?;
                continue;
            };
            if *started {
                f.write_str(" ")?;
            }
            *started = true;
            match next {
                Expr::Atom(a) => f.write_str(a)?,
                Expr::List(nested) => {
                    f.write_str("(")?;
                    frames.push((nested.iter(), false));
                }
            }
        }
        Ok(())
    }
}

/// Result of a lenient parse.
///
/// `expressions` is whatever list was current when the input ran out. When every
/// parenthesis is balanced that is the top level; when lists were left open it is the
/// innermost unclosed list, and everything enclosing it is lost.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    pub expressions: Vec<Expr>,
    pub token_count: usize,
    /// `)` tokens seen with nothing open; each was ignored.
    pub unmatched_close: usize,
    /// `(` tokens still open at end of input.
    pub unclosed_open: usize,
    /// Byte offset (in the cleaned text) of the earliest imbalance, if any.
    pub first_fault: Option<usize>,
}

impl ParsedDocument {
    pub fn is_balanced(&self) -> bool {
        self.unmatched_close == 0 && self.unclosed_open == 0
    }

    /// Rejects any document that needed a lenient fallback.
    pub fn into_strict(self) -> Result<Vec<Expr>, ParseError> {
        if self.is_balanced() {
            return Ok(self.expressions);
        }
        Err(ParseError::MalformedExpression {
            unmatched_close: self.unmatched_close,
            unclosed_open: self.unclosed_open,
            first_offset: self.first_fault.unwrap_or(0),
        })
    }
}

/// Assembles a token stream into expressions.
///
/// `(` pushes the current list and starts a fresh one, `)` appends the finished
/// list to the list it interrupted, and atoms are appended to the current list.
pub fn build<'a>(tokens: impl IntoIterator<Item = Token<'a>>) -> ParsedDocument {
    let mut stack: Vec<(Vec<Expr>, usize)> = Vec::new();
    let mut current: Vec<Expr> = Vec::new();
    let mut token_count = 0;
    let mut unmatched_close = 0;
    let mut first_unmatched: Option<usize> = None;

    for token in tokens {
        token_count += 1;
        match token.kind {
            TokenKind::Open => {
                stack.push((std::mem::take(&mut current), token.offset));
            }
            TokenKind::Close => match stack.pop() {
                Some((mut parent, _)) => {
                    parent.push(Expr::List(std::mem::take(&mut current)));
                    current = parent;
                }
                None => {
                    unmatched_close += 1;
                    first_unmatched.get_or_insert(token.offset);
                }
            },
            TokenKind::Atom(a) => current.push(Expr::Atom(a.to_string())),
        }
    }

    // The outermost open list is the earliest still-open parenthesis.
    let first_unclosed = stack.first().map(|&(_, offset)| offset);
    let first_fault = match (first_unmatched, first_unclosed) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    };

    ParsedDocument {
        expressions: current,
        token_count,
        unmatched_close,
        unclosed_open: stack.len(),
        first_fault,
    }
}

/// Strips comments, tokenizes and assembles `text` leniently.
pub fn parse(text: &str) -> ParsedDocument {
    let cleaned = strip_comments(text);
    let doc = build(tokenize(&cleaned));
    if !doc.is_balanced() {
        warn!(
            unmatched_close = doc.unmatched_close,
            unclosed_open = doc.unclosed_open,
            "unbalanced parentheses; parsed leniently"
        );
    }
    doc
}

/// Like [`parse`], but unbalanced input is an error.
pub fn parse_strict(text: &str) -> Result<Vec<Expr>, ParseError> {
    build(tokenize(&strip_comments(text))).into_strict()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn a(s: &str) -> Expr {
        Expr::atom(s)
    }

    fn l(items: Vec<Expr>) -> Expr {
        Expr::List(items)
    }

    #[test]
    fn test_nested_structure() {
        let doc = parse("(eval (add 1 2)) solo (pair x y)");
        assert!(doc.is_balanced());
        assert_eq!(
            doc.expressions,
            vec![
                l(vec![a("eval"), l(vec![a("add"), a("1"), a("2")])]),
                a("solo"),
                l(vec![a("pair"), a("x"), a("y")]),
            ]
        );
    }

    #[test]
    fn test_empty_list_is_kept() {
        let doc = parse("() (a)");
        assert_eq!(doc.expressions, vec![l(vec![]), l(vec![a("a")])]);
    }

    #[test]
    fn test_comments_are_ignored() {
        let doc = parse("; header\n(a b) ; (c d)\n");
        assert_eq!(doc.expressions, vec![l(vec![a("a"), a("b")])]);
    }

    #[test]
    fn test_unmatched_close_is_ignored() {
        let doc = parse("(a b)) c");
        assert_eq!(doc.expressions, vec![l(vec![a("a"), a("b")]), a("c")]);
        assert_eq!(doc.unmatched_close, 1);
        assert_eq!(doc.unclosed_open, 0);
        assert_eq!(doc.first_fault, Some(5));
    }

    #[test]
    fn test_only_closers_yield_nothing() {
        let doc = parse("))))");
        assert!(doc.expressions.is_empty());
        assert_eq!(doc.unmatched_close, 4);
    }

    #[test]
    fn test_unclosed_list_returns_innermost_open_list() {
        // The completed `(x y)` belongs to the top level, which is never reached again.
        let doc = parse("(x y) (a (b)");
        assert_eq!(doc.unclosed_open, 1);
        assert_eq!(doc.expressions, vec![a("a"), l(vec![a("b")])]);
        assert_eq!(doc.first_fault, Some(6));
    }

    #[rstest]
    #[case("(a b)", true)]
    #[case("(a (b)", false)]
    #[case("a)", false)]
    #[case("", true)]
    fn test_strict_mode(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(parse_strict(input).is_ok(), ok);
    }

    #[test]
    fn test_strict_error_reports_counts() {
        let err = parse_strict(") (a").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedExpression { unmatched_close: 1, unclosed_open: 1, first_offset: 0 }
        );
        assert!(err.to_string().contains("unclosed"));
    }

    #[test]
    fn test_display_round_trips_structure() {
        let doc = parse("(f (g x)   y)");
        assert_eq!(doc.expressions[0].to_string(), "(f (g x) y)");
    }

    fn nesting_depth(expr: &Expr) -> usize {
        let mut depth = 0;
        let mut cur = expr;
        while let Expr::List(items) = cur {
            depth += 1;
            match items.first() {
                Some(next) => cur = next,
                None => break,
            }
        }
        depth
    }

    const DEEP: usize = 1_000_000;

    #[test]
    fn test_deep_nesting_parses_and_drops() {
        let text = format!("(r a b) {}{}", "(".repeat(DEEP), ")".repeat(DEEP));
        let doc = parse(&text);
        assert!(doc.is_balanced());
        assert_eq!(doc.expressions.len(), 2);
        assert_eq!(nesting_depth(&doc.expressions[1]), DEEP);
        drop(doc);

        let report = crate::analyze(&text, &crate::store::RuleSet::standard());
        assert_eq!(report.total_nodes, 2);
        assert_eq!(report.connected_components, 1);
    }

    #[test]
    fn test_deep_list_predicate_uses_rendered_label() {
        let text = format!("({}x{} a b)", "(".repeat(DEEP), ")".repeat(DEEP));
        let mut builder = crate::mapping::GraphBuilder::new(crate::store::RuleSet::standard());
        builder.ingest(&text);

        let graph = builder.finish();
        assert_eq!(graph.node_count(), 2);
        let label = &graph.relation("a", "b").unwrap().predicate;
        assert_eq!(label.len(), 2 * DEEP + 1);
        assert!(label.starts_with("((") && label.ends_with("))"));
        assert_eq!(label.as_bytes()[DEEP], b'x');

        let report = crate::analyze(&text, &crate::store::RuleSet::standard());
        assert_eq!((report.total_nodes, report.largest_component_size), (2, 2));
    }
}
