//! Host-facing adapter for the revive linter.

use std::sync::Arc;

use lintbridge_engine::{Engine, Linter, RuleSet};
use rayon::prelude::*;
use tracing::warn;

use crate::collector::IssueCollector;
use crate::runner::{CompilationUnit, run_revive};
use crate::settings::ReviveSettings;
use crate::{Issue, LintError};

/// Identifier attached to every issue.
pub const LINTER_NAME: &str = "revive";

/// Short description shown by hosts.
pub const LINTER_DESCRIPTION: &str = "Fast, configurable, extensible, flexible, and beautiful \
linter for Go. Drop-in replacement of golint.";

/// What the host must load before handing a unit to the linter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// File names and syntax only, no type information.
    Syntax,
}

/// Result of [`ReviveLinter::run_units`]: units that failed, with their errors.
pub type UnitFailures = Vec<(String, LintError)>;

/// The revive linter as seen by a host.
///
/// The host calls [`run`](Self::run) once per compilation unit, possibly from
/// several threads, then collects everything with [`issues`](Self::issues).
pub struct ReviveLinter {
    settings: ReviveSettings,
    engine: Arc<dyn Engine>,
    rules: RuleSet,
    collector: IssueCollector,
}

impl ReviveLinter {
    /// Creates a linter backed by the reference engine.
    pub fn new(settings: ReviveSettings, rules: RuleSet) -> Result<Self, LintError> {
        let engine = Linter::new(settings.max_open_files)?;
        Ok(Self::with_engine(settings, Arc::new(engine), rules))
    }

    /// Creates a linter backed by `engine`.
    pub fn with_engine(settings: ReviveSettings, engine: Arc<dyn Engine>, rules: RuleSet) -> Self {
        Self {
            settings,
            engine,
            rules,
            collector: IssueCollector::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        LINTER_NAME
    }

    pub fn description(&self) -> &'static str {
        LINTER_DESCRIPTION
    }

    pub fn load_mode(&self) -> LoadMode {
        LoadMode::Syntax
    }

    /// Lints one unit and stores its issues.
    pub fn run(&self, unit: &dyn CompilationUnit) -> Result<(), LintError> {
        let issues = run_revive(unit, &self.settings, self.engine.as_ref(), &self.rules)?;
        self.collector.append(issues);
        Ok(())
    }

    /// Lints many units in parallel.
    ///
    /// A failing unit does not stop the others; its error is returned
    /// alongside the unit name.
    pub fn run_units<U>(&self, units: &[U]) -> UnitFailures
    where
        U: CompilationUnit + Sync,
    {
        units
            .par_iter()
            .filter_map(|unit| {
                self.run(unit).err().map(|error| {
                    warn!("Failed to lint {}: {}", unit.name(), error);
                    (unit.name().to_string(), error)
                })
            })
            .collect()
    }

    /// Returns every issue collected so far and resets the collector.
    pub fn issues(&self) -> Vec<Issue> {
        self.collector.drain()
    }
}
