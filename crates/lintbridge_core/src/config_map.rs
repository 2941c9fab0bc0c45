//! Maps host settings onto the engine's native configuration tree.

use serde_yaml::Value as YamlValue;
use toml::{Table, Value};

use crate::LintError;
use crate::settings::{ReviveSettings, RuleSettings};

/// Builds the raw configuration tree for `settings`.
///
/// Scalar keys are always present. The `directive` and `rule` tables are
/// only emitted when non-empty; empty severities and argument lists are
/// omitted so the engine applies its own defaults.
pub fn create_config_map(settings: &ReviveSettings) -> Result<Table, LintError> {
    let mut root = Table::new();
    root.insert(
        "ignoreGeneratedHeader".to_string(),
        Value::Boolean(settings.ignore_generated_header),
    );
    root.insert("confidence".to_string(), Value::Float(settings.confidence));
    if !settings.severity.is_empty() {
        root.insert(
            "severity".to_string(),
            Value::String(settings.severity.clone()),
        );
    }
    root.insert("errorCode".to_string(), Value::Integer(settings.error_code));
    root.insert(
        "warningCode".to_string(),
        Value::Integer(settings.warning_code),
    );
    root.insert(
        "enableAllRules".to_string(),
        Value::Boolean(settings.enable_all_rules),
    );

    let mut directives = Table::new();
    for directive in &settings.directives {
        let mut entry = Table::new();
        if !directive.severity.is_empty() {
            entry.insert(
                "severity".to_string(),
                Value::String(directive.severity.clone()),
            );
        }
        directives.insert(directive.name.clone(), Value::Table(entry));
    }
    if !directives.is_empty() {
        root.insert("directive".to_string(), Value::Table(directives));
    }

    let mut rules = Table::new();
    for rule in &settings.rules {
        rules.insert(rule.name.clone(), Value::Table(rule_entry(rule)?));
    }
    if !rules.is_empty() {
        root.insert("rule".to_string(), Value::Table(rules));
    }

    Ok(root)
}

fn rule_entry(rule: &RuleSettings) -> Result<Table, LintError> {
    let mut entry = Table::new();
    if !rule.severity.is_empty() {
        entry.insert("severity".to_string(), Value::String(rule.severity.clone()));
    }
    if let Some(arguments) = safe_arguments(&rule.arguments)? {
        entry.insert("arguments".to_string(), Value::Array(arguments));
    }
    entry.insert("disabled".to_string(), Value::Boolean(rule.disabled));
    Ok(entry)
}

/// Converts rule arguments to engine values.
///
/// Returns `None` for an empty list. Mapping keys are downcast to strings;
/// any other key kind is an [`LintError::InvalidArgumentKind`].
pub fn safe_arguments(arguments: &[YamlValue]) -> Result<Option<Vec<Value>>, LintError> {
    if arguments.is_empty() {
        return Ok(None);
    }

    arguments
        .iter()
        .map(to_engine_value)
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn to_engine_value(value: &YamlValue) -> Result<Value, LintError> {
    match value {
        YamlValue::Null => Err(LintError::config_encoding(
            "null is not a valid argument value",
        )),
        YamlValue::Bool(b) => Ok(Value::Boolean(*b)),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Integer(i))
            } else if n.is_f64()
                && let Some(f) = n.as_f64()
            {
                Ok(Value::Float(f))
            } else {
                Err(LintError::config_encoding(format!(
                    "integer {} is out of range",
                    n
                )))
            }
        }
        YamlValue::String(s) => Ok(Value::String(s.clone())),
        YamlValue::Sequence(items) => items
            .iter()
            .map(to_engine_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        YamlValue::Mapping(mapping) => {
            let mut table = Table::new();
            for (key, item) in mapping {
                let key = key.as_str().ok_or_else(|| {
                    LintError::invalid_argument_kind(format!(
                        "argument keys must be strings, got {:?}",
                        key
                    ))
                })?;
                // A key without a value is left out, as if never written.
                if item.is_null() {
                    continue;
                }
                table.insert(key.to_string(), to_engine_value(item)?);
            }
            Ok(Value::Table(table))
        }
        YamlValue::Tagged(tagged) => to_engine_value(&tagged.value),
    }
}
