use crate::analysis::analyze_connectivity;
use crate::display::{format_report, to_dot};
use crate::mapping::GraphBuilder;
use crate::store::{ConfigError, RulePatch, RuleSet};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn to_py_err(e: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Stateful analyzer mirroring the configure -> parse -> analyze flow.
#[pyclass(name = "_Analyzer")]
#[derive(Debug, Clone, Default)]
pub struct PyAnalyzer {
    builder: GraphBuilder,
}

#[pymethods]
impl PyAnalyzer {
    #[new]
    pub fn new() -> Self { Self::default() }

    /// Accepts a JSON object with optional `default` and `predicates` keys.
    pub fn set_connection_rules(&mut self, rules_json: &str) -> PyResult<()> {
        let patch: RulePatch = serde_json::from_str(rules_json)
            .map_err(|e| to_py_err(ConfigError::Json(e)))?;
        self.builder.rules_mut().update(patch);
        Ok(())
    }

    pub fn parse(&mut self, text: &str) -> usize {
        self.builder.ingest(text).expressions.len()
    }

    pub fn parse_strict(&mut self, text: &str) -> PyResult<usize> {
        self.builder.ingest_strict(text).map_err(to_py_err)
    }

    /// Returns the connectivity report as a JSON string.
    pub fn analyze_connectivity(&self) -> PyResult<String> {
        analyze_connectivity(self.builder.graph()).to_json().map_err(to_py_err)
    }

    pub fn format_report(&self) -> String {
        format_report(&analyze_connectivity(self.builder.graph()))
    }

    pub fn to_dot(&self) -> String {
        to_dot(self.builder.graph())
    }

    pub fn node_count(&self) -> usize { self.builder.graph().node_count() }
    pub fn edge_count(&self) -> usize { self.builder.graph().edge_count() }
}

/// One-shot analysis; `rules_json` defaults to the standard rule table.
#[pyfunction]
#[pyo3(signature = (text, rules_json=None))]
fn analyze(text: &str, rules_json: Option<&str>) -> PyResult<String> {
    let rules = match rules_json {
        Some(json) => RuleSet::from_json(json).map_err(to_py_err)?,
        None => RuleSet::standard(),
    };
    crate::analyze(text, &rules).to_json().map_err(to_py_err)
}

#[pyfunction]
fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Defines the `_core` Python module.
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(analyze, m)?)?;
    m.add_function(wrap_pyfunction!(version, m)?)?;
    m.add_class::<PyAnalyzer>()?;
    Ok(())
}
