//! Rule trait and rule catalogue.

use std::collections::HashMap;
use std::sync::Arc;

use crate::Failure;

const GENERATED_HEADER: &str = "// Code generated ";
const GENERATED_FOOTER: &str = " DO NOT EDIT.";

/// A source file handed to rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub name: String,
    pub content: String,
}

impl File {
    /// Creates a new file.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Returns true if the file carries a generated-code header.
    ///
    /// Any line of the form `// Code generated ... DO NOT EDIT.` counts, wherever
    /// it appears in the file.
    pub fn is_generated(&self) -> bool {
        self.content.lines().any(|line| {
            line.len() >= GENERATED_HEADER.len() + GENERATED_FOOTER.len()
                && line.starts_with(GENERATED_HEADER)
                && line.ends_with(GENERATED_FOOTER)
        })
    }
}

/// A lint rule.
///
/// Implementations are supplied by the host. The engine stamps the rule's
/// name onto every failure it returns.
pub trait Rule: Send + Sync {
    /// Unique name used in configuration (`[rule.<name>]`).
    fn name(&self) -> &str;

    /// Runs the rule against a single file.
    fn apply(&self, file: &File, arguments: &[toml::Value]) -> Vec<Failure>;
}

/// Catalogue of available rules, keyed by name.
#[derive(Default, Clone)]
pub struct RuleSet {
    rules: HashMap<String, Arc<dyn Rule>>,
}

impl RuleSet {
    /// Creates an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule, replacing any previous rule of the same name.
    pub fn register(&mut self, rule: Arc<dyn Rule>) {
        self.rules.insert(rule.name().to_string(), rule);
    }

    /// Builder-style variant of [`RuleSet::register`].
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.register(Arc::new(rule));
        self
    }

    /// Looks up a rule by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Rule>> {
        self.rules.get(name).cloned()
    }

    /// Returns the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rule is registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over the registered rule names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("RuleSet").field("rules", &names).finish()
    }
}
