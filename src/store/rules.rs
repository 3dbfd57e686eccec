//! rules.rs
//! The connection rule table: a default directionality plus per-predicate overrides.

use super::types::Directionality;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown directionality '{value}' for {scope} (expected 'undirected' or 'directed')")]
    UnknownDirectionality { scope: String, value: String },
    #[error("Invalid rule configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Cannot read rule configuration {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The raw, string-typed configuration document.
///
/// ```json
/// { "default": "undirected", "predicates": { "causes": "directed" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub default: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicates: Option<HashMap<String, String>>,
}

/// Partial configuration used by [`RuleSet::update`]; absent keys keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulePatch {
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub predicates: Option<HashMap<String, String>>,
}

impl From<RuleConfig> for RulePatch {
    fn from(config: RuleConfig) -> Self {
        Self { default: Some(config.default), predicates: config.predicates }
    }
}

/// Resolved rule table. Lookup never fails: unknown predicates use `default`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub default: Directionality,
    #[serde(default)]
    pub predicates: HashMap<String, Directionality>,
}

impl RuleSet {
    pub fn new(default: Directionality) -> Self {
        Self { default, predicates: HashMap::new() }
    }

    /// The table the analyzer's web front-end installs.
    pub fn standard() -> Self {
        Self::new(Directionality::Undirected)
            .with_predicate("triggers", Directionality::Directed)
            .with_predicate("causes", Directionality::Directed)
            .with_predicate("related_to", Directionality::Undirected)
    }

    pub fn with_predicate(mut self, predicate: impl Into<String>, dir: Directionality) -> Self {
        self.predicates.insert(predicate.into(), dir);
        self
    }

    pub fn set_default(&mut self, dir: Directionality) {
        self.default = dir;
    }

    pub fn set_predicate(&mut self, predicate: impl Into<String>, dir: Directionality) {
        self.predicates.insert(predicate.into(), dir);
    }

    pub fn directionality(&self, predicate: &str) -> Directionality {
        self.predicates.get(predicate).copied().unwrap_or(self.default)
    }

    /// Resolves a configuration; unrecognized values behave as `directed`.
    pub fn from_config(config: &RuleConfig) -> Self {
        let mut rules = Self::default();
        rules.update(RulePatch::from(config.clone()));
        rules
    }

    /// Resolves a configuration, rejecting any unrecognized directionality.
    pub fn from_config_strict(config: &RuleConfig) -> Result<Self, ConfigError> {
        let strict = |scope: String, value: &str| {
            Directionality::parse(value).ok_or_else(|| ConfigError::UnknownDirectionality {
                scope,
                value: value.to_string(),
            })
        };

        let default = strict("default".to_string(), &config.default)?;
        let mut predicates = HashMap::new();
        for (name, value) in config.predicates.iter().flatten() {
            predicates.insert(name.clone(), strict(format!("predicate '{}'", name), value)?);
        }
        Ok(Self { default, predicates })
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: RuleConfig = serde_json::from_str(json)?;
        Ok(Self::from_config(&config))
    }

    pub fn from_json_strict(json: &str) -> Result<Self, ConfigError> {
        let config: RuleConfig = serde_json::from_str(json)?;
        Self::from_config_strict(&config)
    }

    /// Loads a JSON configuration file (lenient resolution).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_json(&json)
    }

    /// Applies a patch key by key. A present `predicates` map replaces the
    /// current overrides wholesale rather than merging into them.
    pub fn update(&mut self, patch: RulePatch) {
        if let Some(default) = patch.default {
            self.default = Directionality::parse_lenient(&default);
        }
        if let Some(predicates) = patch.predicates {
            self.predicates = predicates
                .into_iter()
                .map(|(name, value)| (name, Directionality::parse_lenient(&value)))
                .collect();
        }
    }

    pub fn to_config(&self) -> RuleConfig {
        RuleConfig {
            default: self.default.as_str().to_string(),
            predicates: Some(
                self.predicates
                    .iter()
                    .map(|(k, v)| (k.clone(), v.as_str().to_string()))
                    .collect(),
            ),
        }
    }
}
