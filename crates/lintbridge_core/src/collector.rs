//! Thread-safe issue accumulation across lint invocations.

use parking_lot::Mutex;

use crate::Issue;

/// Accumulates issues from concurrent invocations.
///
/// Each `append` keeps the order of its own issues; the relative order of
/// concurrent appends is unspecified.
#[derive(Debug, Default)]
pub struct IssueCollector {
    issues: Mutex<Vec<Issue>>,
}

impl IssueCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a batch of issues.
    pub fn append(&self, issues: Vec<Issue>) {
        if issues.is_empty() {
            return;
        }
        self.issues.lock().extend(issues);
    }

    /// Takes every accumulated issue, leaving the collector empty.
    pub fn drain(&self) -> Vec<Issue> {
        std::mem::take(&mut *self.issues.lock())
    }

    /// Returns the number of accumulated issues.
    pub fn len(&self) -> usize {
        self.issues.lock().len()
    }

    /// Returns true if nothing has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.issues.lock().is_empty()
    }
}
