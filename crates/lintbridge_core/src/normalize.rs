//! Fills defaults into a decoded engine configuration.

use lintbridge_engine::{Config, RuleConfig, Severity};

use crate::registry::all_rules;

/// Confidence used when none is configured.
pub const DEFAULT_CONFIDENCE: f64 = 0.8;

/// Normalizes `config` in place.
///
/// - A zero confidence becomes [`DEFAULT_CONFIDENCE`].
/// - A missing severity becomes `warning`.
/// - With `enable_all_rules`, every known rule missing from the rule map is
///   added with an empty configuration. Existing entries are kept.
/// - Rules and directives without a severity inherit the global one.
///
/// Applying it twice yields the same configuration as applying it once.
pub fn normalize(config: &mut Config) {
    if config.confidence == 0.0 {
        config.confidence = DEFAULT_CONFIDENCE;
    }
    let severity = *config.severity.get_or_insert(Severity::Warning);

    if config.enable_all_rules {
        for name in all_rules() {
            config.rules.entry(name.to_string()).or_insert_with(RuleConfig::default);
        }
    }

    // Must follow the expansion above so added rules inherit too.
    for rule in config.rules.values_mut() {
        rule.severity.get_or_insert(severity);
    }
    for directive in config.directives.values_mut() {
        directive.severity.get_or_insert(severity);
    }
}
