//! Runs the engine on one compilation unit and converts its output.

use std::thread;

use lintbridge_engine::{Config, Engine, FailureStream, Formatter, RuleSet, get_formatter};
use tracing::{debug, error};

use crate::converter::{RawFailure, to_issue};
use crate::resolver::{resolve_config, resolve_lint_rules};
use crate::settings::ReviveSettings;
use crate::{Issue, LintError};

/// Smallest unit of source the engine is invoked on.
pub trait CompilationUnit {
    /// Identifier used in logs and error reports.
    fn name(&self) -> &str;

    /// Paths of the files making up the unit.
    fn file_names(&self) -> Vec<String>;
}

/// A named group of source files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub files: Vec<String>,
}

impl Package {
    /// Creates a new package.
    pub fn new(name: impl Into<String>, files: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }
}

impl CompilationUnit for Package {
    fn name(&self) -> &str {
        &self.name
    }

    fn file_names(&self) -> Vec<String> {
        self.files.clone()
    }
}

/// Lints a single unit and returns its issues.
///
/// Any failure aborts the run; no partial issue list is returned.
pub fn run_revive(
    unit: &dyn CompilationUnit,
    settings: &ReviveSettings,
    engine: &dyn Engine,
    catalogue: &RuleSet,
) -> Result<Vec<Issue>, LintError> {
    let packages = vec![unit.file_names()];

    let config = resolve_config(settings)?;
    let formatter = get_formatter("json")?;
    let rules = resolve_lint_rules(&config, catalogue)?;

    let failures = engine.lint(&packages, &rules, &config)?;
    let output = format_failures(formatter.as_ref(), failures, &config)?;

    let results = decode_results(&output)?;

    debug!("{}: {} issues", unit.name(), results.len());
    Ok(results.iter().map(to_issue).collect())
}

/// Parses the JSON formatter output back into failures.
pub fn decode_results(output: &str) -> Result<Vec<RawFailure>, LintError> {
    serde_json::from_str(output).map_err(|e| LintError::ResultDecoding(e.to_string()))
}

/// Streams `failures` through `formatter` on a separate thread.
///
/// Failures below the configured confidence never reach the formatter. The
/// output is only returned once the formatter has drained the stream.
pub fn format_failures(
    formatter: &dyn Formatter,
    failures: FailureStream,
    config: &Config,
) -> Result<String, LintError> {
    let (format_tx, format_rx) = crossbeam_channel::unbounded();

    thread::scope(|scope| {
        let consumer = scope.spawn(move || formatter.format(format_rx, config));

        for failure in failures.iter() {
            if failure.confidence < config.confidence {
                continue;
            }
            if format_tx.send(failure).is_err() {
                break;
            }
        }
        drop(format_tx);

        match consumer.join() {
            Ok(Ok(output)) => Ok(output),
            Ok(Err(e)) => {
                error!("Format error: {}", e);
                Err(LintError::format(e.to_string()))
            }
            Err(_) => Err(LintError::format("formatter panicked")),
        }
    })
}
