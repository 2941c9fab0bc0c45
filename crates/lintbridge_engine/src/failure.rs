//! Failure types emitted by rules.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity level attached to configuration entries and failures.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Warning - should be reviewed.
    #[default]
    Warning,
    /// Error - must be fixed.
    Error,
}

impl Severity {
    /// Returns the lowercase name used in configuration files and reports.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A position in a source file.
///
/// Lines and columns are 1-indexed, the offset is a 0-indexed byte offset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Position {
    pub filename: String,
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    pub fn new(filename: impl Into<String>, offset: usize, line: usize, column: usize) -> Self {
        Self {
            filename: filename.into(),
            offset,
            line,
            column,
        }
    }
}

/// Start and end of a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FailurePosition {
    pub start: Position,
    pub end: Position,
}

/// A single finding reported by a rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Failure {
    /// Human-readable message.
    pub failure: String,

    /// Name of the rule that produced the failure.
    ///
    /// Overwritten by the engine with the name of the rule it ran.
    #[serde(default)]
    pub rule_name: String,

    /// Free-form category (`naming`, `style`, ...).
    #[serde(default)]
    pub category: String,

    pub position: FailurePosition,

    /// Certainty of the finding, in `[0, 1]`.
    pub confidence: f64,

    /// Suggested replacement for the offending line, if any.
    #[serde(default)]
    pub replacement_line: String,
}

impl Failure {
    /// Creates a failure with full confidence.
    pub fn new(message: impl Into<String>, position: FailurePosition) -> Self {
        Self {
            failure: message.into(),
            position,
            confidence: 1.0,
            ..Self::default()
        }
    }

    /// Sets the confidence.
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    /// Sets the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn position(line: usize) -> Position {
        Position::new("main.go", line * 10, line, 1)
    }

    #[test]
    fn test_failure_new() {
        let failure = Failure::new(
            "exported function Foo should have comment",
            FailurePosition {
                start: position(3),
                end: position(5),
            },
        );

        assert_eq!(failure.confidence, 1.0);
        assert!(failure.rule_name.is_empty());
        assert_eq!(failure.position.start.line, 3);
    }

    #[test]
    fn test_failure_serializes_with_pascal_case_keys() {
        let failure = Failure::new(
            "msg",
            FailurePosition {
                start: position(1),
                end: position(2),
            },
        )
        .with_confidence(0.9)
        .with_category("naming");

        let value = serde_json::to_value(&failure).unwrap();

        assert_eq!(value["Failure"], "msg");
        assert_eq!(value["Category"], "naming");
        assert_eq!(value["Confidence"], 0.9);
        assert_eq!(value["Position"]["Start"]["Filename"], "main.go");
        assert_eq!(value["Position"]["End"]["Line"], 2);
    }

    #[test]
    fn test_severity_strings() {
        assert_eq!(Severity::default(), Severity::Warning);
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(
            serde_json::to_string(&Severity::Warning).unwrap(),
            "\"warning\""
        );
        assert!(serde_json::from_str::<Severity>("\"info\"").is_err());
    }
}
