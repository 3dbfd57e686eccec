//! Parallel analysis of independent documents.
//!
//! Each document gets its own builder and graph; nothing is shared between
//! documents except the read-only rule table.

use crate::analysis::ConnectivityReport;
use crate::error::Result;
use crate::store::RuleSet;
use rayon::prelude::*;

/// Analyzes every document in parallel. Output order matches input order.
pub fn analyze_batch<S: AsRef<str> + Sync>(documents: &[S], rules: &RuleSet) -> Vec<ConnectivityReport> {
    documents
        .par_iter()
        .map(|doc| crate::analyze(doc.as_ref(), rules))
        .collect()
}

/// Strict variant: fails on the first document with unbalanced parentheses.
pub fn analyze_batch_strict<S: AsRef<str> + Sync>(
    documents: &[S],
    rules: &RuleSet,
) -> Result<Vec<ConnectivityReport>> {
    documents
        .par_iter()
        .map(|doc| crate::analyze_strict(doc.as_ref(), rules))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalyzerError;

    #[test]
    fn test_documents_do_not_share_state() {
        let docs = ["(r a b)", "(r a c) d", ""];
        let reports = analyze_batch(&docs, &RuleSet::standard());
        let totals: Vec<usize> = reports.iter().map(|r| r.total_nodes).collect();
        assert_eq!(totals, vec![2, 3, 0]);
    }

    #[test]
    fn test_matches_sequential_analysis() {
        let docs: Vec<String> = (0..32).map(|i| format!("(r n{} n{}) solo{}", i, i + 1, i)).collect();
        let rules = RuleSet::standard();
        let parallel = analyze_batch(&docs, &rules);
        let sequential: Vec<_> = docs.iter().map(|d| crate::analyze(d, &rules)).collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_strict_batch_reports_malformed_document() {
        let docs = ["(r a b)", "(r a"];
        let err = analyze_batch_strict(&docs, &RuleSet::standard()).unwrap_err();
        assert!(matches!(err, AnalyzerError::Parse(_)));
    }
}
