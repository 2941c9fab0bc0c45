//! Host-facing issue type.

use lintbridge_engine::Position;
use serde::Serialize;

/// Inclusive range of lines covered by an issue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct LineRange {
    pub from: usize,
    pub to: usize,
}

/// A finding reported to the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Issue {
    /// Severity name (`warning`, `error`).
    pub severity: String,

    /// `"<rule>: <message>"`.
    pub text: String,

    /// Anchor position of the finding.
    pub pos: Position,

    pub line_range: LineRange,

    /// Linter that produced the issue.
    pub from_linter: String,
}
