//! Rule name catalogues.
//!
//! Only names live here; rule bodies come from the host's `RuleSet`.

use lintbridge_engine::{Config, RuleConfig, Severity};

use crate::normalize::DEFAULT_CONFIDENCE;

/// Rule whose findings are anchored to a single line.
pub const EXPORTED_RULE: &str = "exported";

/// Rules enabled when no settings are given.
pub const DEFAULT_RULES: &[&str] = &[
    "var-declaration",
    "package-comments",
    "dot-imports",
    "blank-imports",
    EXPORTED_RULE,
    "var-naming",
    "indent-error-flow",
    "range",
    "errorf",
    "error-naming",
    "error-strings",
    "receiver-naming",
    "increment-decrement",
    "error-return",
    "unexported-return",
    "time-naming",
    "context-keys-type",
    "context-as-argument",
    "empty-block",
    "superfluous-else",
    "unused-parameter",
    "unreachable-code",
    "redefines-builtin-id",
];

/// Rules that are only enabled explicitly or through `enable-all-rules`.
pub const OPTIONAL_RULES: &[&str] = &[
    "argument-limit",
    "cyclomatic",
    "file-header",
    "confusing-naming",
    "get-return",
    "modifies-parameter",
    "confusing-results",
    "deep-exit",
    "add-constant",
    "flag-parameter",
    "unnecessary-stmt",
    "struct-tag",
    "modifies-value-receiver",
    "constant-logical-expr",
    "bool-literal-in-expr",
    "imports-blacklist",
    "function-result-limit",
    "max-public-structs",
    "range-val-in-closure",
    "range-val-address",
    "waitgroup-by-value",
    "atomic",
    "empty-lines",
    "line-length-limit",
    "call-to-gc",
    "duplicated-imports",
    "import-shadowing",
    "bare-return",
    "unused-receiver",
    "unhandled-error",
    "cognitive-complexity",
    "string-of-int",
    "string-format",
    "early-return",
    "unconditional-recursion",
    "identical-branches",
    "defer",
    "unexported-naming",
    "function-length",
    "nested-structs",
    "useless-break",
    "unchecked-type-assertion",
    "time-equal",
    "banned-characters",
    "optimize-operands-order",
    "use-any",
    "datarace",
    "comment-spacings",
    "if-return",
    "redundant-import-alias",
    "import-alias-naming",
    "enforce-map-style",
    "enforce-repeated-arg-type-style",
    "enforce-slice-style",
];

/// Iterates over every known rule name: optional rules, then defaults.
pub fn all_rules() -> impl Iterator<Item = &'static str> {
    OPTIONAL_RULES.iter().chain(DEFAULT_RULES).copied()
}

/// Configuration used when the host supplies no settings.
pub fn default_config() -> Config {
    Config {
        confidence: DEFAULT_CONFIDENCE,
        severity: Some(Severity::Warning),
        rules: DEFAULT_RULES
            .iter()
            .map(|name| (name.to_string(), RuleConfig::default()))
            .collect(),
        ..Config::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalogue_sizes() {
        assert_eq!(DEFAULT_RULES.len(), 23);
        assert_eq!(all_rules().count(), DEFAULT_RULES.len() + OPTIONAL_RULES.len());
    }

    #[test]
    fn test_catalogue_has_no_duplicates() {
        let names: HashSet<&str> = all_rules().collect();
        assert_eq!(names.len(), all_rules().count());
    }

    #[test]
    fn test_defaults_are_part_of_all_rules() {
        let all: HashSet<&str> = all_rules().collect();
        assert!(DEFAULT_RULES.iter().all(|name| all.contains(name)));
        assert!(all.contains(EXPORTED_RULE));
    }

    #[test]
    fn test_default_config() {
        let config = default_config();

        assert_eq!(config.confidence, 0.8);
        assert_eq!(config.severity, Some(Severity::Warning));
        assert_eq!(config.rules.len(), DEFAULT_RULES.len());
        assert!(config.directives.is_empty());
        assert!(!config.enable_all_rules);
    }
}
