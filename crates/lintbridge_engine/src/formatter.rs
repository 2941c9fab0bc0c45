//! Failure formatters.

use serde::Serialize;
use tracing::debug;

use crate::{Config, EngineError, Failure, FailureStream, Severity};

/// Consumes a failure stream and renders it.
pub trait Formatter: Send + Sync {
    /// Name used to look the formatter up.
    fn name(&self) -> &'static str;

    /// Drains `failures` until the sending side is closed.
    fn format(&self, failures: FailureStream, config: &Config) -> Result<String, EngineError>;
}

/// Renders failures as a JSON array.
///
/// Each element is the failure object with an extra `Severity` key.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonFailure {
    #[serde(rename = "Severity")]
    severity: Severity,
    #[serde(flatten)]
    failure: Failure,
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn format(&self, failures: FailureStream, config: &Config) -> Result<String, EngineError> {
        let objects: Vec<JsonFailure> = failures
            .iter()
            .map(|failure| JsonFailure {
                severity: severity(config, &failure),
                failure,
            })
            .collect();

        debug!("Formatted {} failures", objects.len());
        Ok(serde_json::to_string(&objects)?)
    }
}

/// Looks up a formatter by name.
pub fn get_formatter(name: &str) -> Result<Box<dyn Formatter>, EngineError> {
    match name {
        "json" => Ok(Box::new(JsonFormatter)),
        _ => Err(EngineError::UnknownFormatter(name.to_string())),
    }
}

/// A failure is an error only if its rule, or a directive of the same name,
/// is configured as one.
fn severity(config: &Config, failure: &Failure) -> Severity {
    let rule_is_error = config
        .rules
        .get(&failure.rule_name)
        .is_some_and(|rule| rule.severity == Some(Severity::Error));
    let directive_is_error = config
        .directives
        .get(&failure.rule_name)
        .is_some_and(|directive| directive.severity == Some(Severity::Error));

    if rule_is_error || directive_is_error {
        Severity::Error
    } else {
        Severity::Warning
    }
}
