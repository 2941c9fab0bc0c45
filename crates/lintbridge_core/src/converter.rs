//! Conversion of formatted failures into host issues.

use lintbridge_engine::{Failure, Severity};
use serde::Deserialize;

use crate::issue::{Issue, LineRange};
use crate::linter::LINTER_NAME;
use crate::registry::EXPORTED_RULE;

/// A failure as read back from the JSON formatter output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawFailure {
    #[serde(rename = "Severity")]
    pub severity: Severity,
    #[serde(flatten)]
    pub failure: Failure,
}

/// Converts a formatted failure into an [`Issue`].
///
/// Findings of the `exported` rule span a whole declaration; they are
/// reported on their first line only.
pub fn to_issue(raw: &RawFailure) -> Issue {
    let failure = &raw.failure;
    let start = &failure.position.start;

    let to = if failure.rule_name == EXPORTED_RULE {
        start.line
    } else {
        failure.position.end.line
    };

    Issue {
        severity: raw.severity.to_string(),
        text: format!("{}: {}", failure.rule_name, failure.failure),
        pos: start.clone(),
        line_range: LineRange {
            from: start.line,
            to,
        },
        from_linter: LINTER_NAME.to_string(),
    }
}
