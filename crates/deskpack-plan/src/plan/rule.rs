use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use regex::Regex;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{NoMatchingRule, PlanError};

/// A compiled path pattern, serialized as its regex source.
#[derive(Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(source: &str) -> Result<Self, PlanError> {
        Regex::new(source)
            .map(Self)
            .map_err(|err| PlanError::InvalidPattern {
                pattern: source.to_string(),
                message: err.to_string(),
            })
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.0.is_match(path)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.0.as_str())
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Pattern {}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Pattern::new(&source).map_err(D::Error::custom)
    }
}

/// A single named processing step applied to a matched file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub loader: String,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub options: IndexMap<String, Value>,
}

impl Transform {
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: IndexMap::new(),
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }
}

/// Phase a rule runs in relative to the selected rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Enforce {
    /// Runs ahead of the selected chain (linting)
    Pre,
}

/// Maps a path pattern to the transform chain applied to matching files.
///
/// Chain order is application order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub test: Pattern,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Pattern>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Pattern>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce: Option<Enforce>,

    #[serde(rename = "use")]
    pub chain: Vec<Transform>,
}

impl Rule {
    pub fn new(test: Pattern, chain: Vec<Transform>) -> Self {
        Self {
            test,
            exclude: None,
            include: None,
            enforce: None,
            chain,
        }
    }

    pub fn excluding(mut self, exclude: Pattern) -> Self {
        self.exclude = Some(exclude);
        self
    }

    pub fn including(mut self, include: Pattern) -> Self {
        self.include = Some(include);
        self
    }

    pub fn enforced(mut self, enforce: Enforce) -> Self {
        self.enforce = Some(enforce);
        self
    }

    pub fn is_pre(&self) -> bool {
        self.enforce == Some(Enforce::Pre)
    }

    /// Whether this rule claims `path`: test and include (when set) match,
    /// exclusion does not.
    pub fn matches(&self, path: &str) -> bool {
        self.test.is_match(path)
            && self
                .include
                .as_ref()
                .is_none_or(|include| include.is_match(path))
            && !self
                .exclude
                .as_ref()
                .is_some_and(|exclude| exclude.is_match(path))
    }
}

/// What to do with a file no rule claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnmatchedPolicy {
    /// Hand the file to the engine unmodified
    #[default]
    PassThrough,
    /// Treat the miss as an error
    Fail,
}

/// Outcome of resolving a file against a rule table.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    Chain(Vec<&'a Transform>),
    PassThrough,
}

/// Normalize a candidate path for matching (forward slashes only).
pub fn normalize_path(path: impl AsRef<Path>) -> String {
    path.as_ref().to_string_lossy().replace('\\', "/")
}

/// Position of the first non-`pre` rule that claims `path`.
///
/// Declaration order decides: rules are not mutually exclusive, so a later
/// rule is never consulted once an earlier one matches.
pub fn select_rule_index(path: &str, rules: &[Rule]) -> Option<usize> {
    let path = normalize_path(path);
    rules
        .iter()
        .position(|rule| !rule.is_pre() && rule.matches(&path))
}

/// Transform chain applied to `path`.
///
/// Every matching `pre` rule contributes its transforms first, in declared
/// order, followed by the chain of the first matching regular rule. A miss
/// means neither kind of rule claims the file.
pub fn select_rule<'a>(path: &str, rules: &'a [Rule]) -> Result<Vec<&'a Transform>, NoMatchingRule> {
    let normalized = normalize_path(path);
    let mut chain: Vec<&Transform> = rules
        .iter()
        .filter(|rule| rule.is_pre() && rule.matches(&normalized))
        .flat_map(|rule| rule.chain.iter())
        .collect();

    if let Some(index) = select_rule_index(path, rules) {
        chain.extend(rules[index].chain.iter());
    }

    if chain.is_empty() {
        return Err(NoMatchingRule {
            path: path.to_string(),
        });
    }
    Ok(chain)
}
