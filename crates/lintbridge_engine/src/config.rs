//! Engine-native configuration.
//!
//! The on-disk shape is TOML with camelCase top-level keys and two nested
//! tables, `[rule.<name>]` and `[directive.<name>]`:
//!
//! ```toml
//! confidence = 0.8
//! severity = "warning"
//! enableAllRules = false
//!
//! [rule.line-length-limit]
//! severity = "error"
//! arguments = [120]
//!
//! [directive.specify-disable-reason]
//! severity = "error"
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Severity;

/// Rule arguments as understood by the engine.
///
/// Each element is a TOML value, so maps are always string-keyed.
pub type Arguments = Vec<toml::Value>;

/// Configuration of a single rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Arguments,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,

    #[serde(default)]
    pub disabled: bool,
}

/// Configuration of a single directive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectiveConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

/// Complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub ignore_generated_header: bool,

    /// Failures below this confidence are dropped.
    #[serde(default)]
    pub confidence: f64,

    /// Severity inherited by rules and directives that do not set one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,

    #[serde(default)]
    pub enable_all_rules: bool,

    #[serde(default, rename = "rule")]
    pub rules: BTreeMap<String, RuleConfig>,

    #[serde(default, rename = "directive")]
    pub directives: BTreeMap<String, DirectiveConfig>,

    #[serde(default)]
    pub error_code: i64,

    #[serde(default)]
    pub warning_code: i64,
}

impl Config {
    /// Returns the configuration of the named rule, if present.
    pub fn rule(&self, name: &str) -> Option<&RuleConfig> {
        self.rules.get(name)
    }

    /// Returns the configured arguments of the named rule.
    pub fn arguments(&self, name: &str) -> &[toml::Value] {
        self.rules
            .get(name)
            .map(|rule| rule.arguments.as_slice())
            .unwrap_or_default()
    }
}
