//! Host-facing linter settings.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::LintError;

/// Settings for the revive linter, as written in the host's configuration.
///
/// Every field is optional; the zero value means "no overrides".
///
/// ```yaml
/// confidence: 0.8
/// severity: warning
/// enable-all-rules: true
/// rules:
///   - name: line-length-limit
///     severity: error
///     arguments: [120]
///   - name: add-constant
///     disabled: true
/// directives:
///   - name: specify-disable-reason
///     severity: error
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ReviveSettings {
    /// Bound on files read concurrently; `0` leaves it to the engine.
    pub max_open_files: usize,
    pub ignore_generated_header: bool,
    pub confidence: f64,
    pub severity: String,
    pub enable_all_rules: bool,
    pub rules: Vec<RuleSettings>,
    pub error_code: i64,
    pub warning_code: i64,
    pub directives: Vec<DirectiveSettings>,
}

/// Override for a single rule.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RuleSettings {
    pub name: String,
    pub severity: String,
    pub disabled: bool,
    /// Free-form arguments. Map keys may be of any YAML type here.
    pub arguments: Vec<serde_yaml::Value>,
}

/// Override for a single directive.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DirectiveSettings {
    pub name: String,
    pub severity: String,
}

impl ReviveSettings {
    /// Parses settings from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, LintError> {
        serde_yaml::from_str(yaml)
            .map_err(|e| LintError::settings(format!("Invalid settings: {}", e)))
    }

    /// Loads settings from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LintError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LintError::settings(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_yaml(&content)
    }

    /// Returns true if no field differs from the zero value.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
