//! # lintbridge_engine
//!
//! Rule engine vocabulary for LintBridge.
//!
//! This crate provides:
//! - Failure and position types emitted by rules
//! - The engine-native configuration (`Config`)
//! - The `Rule` trait and the `RuleSet` catalogue
//! - The `Engine` entry point and a reference `Linter` implementation
//! - Failure formatters (`json`)
//!
//! Rule bodies are not part of this crate. Hosts register their own
//! implementations in a `RuleSet`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use lintbridge_engine::{Config, Engine, Linter, RuleSet};
//!
//! let engine = Linter::new(0)?;
//! let failures = engine.lint(&[vec!["main.go".to_string()]], &rules, &Config::default())?;
//! for failure in failures.iter() {
//!     println!("{}: {}", failure.rule_name, failure.failure);
//! }
//! ```

mod config;
mod error;
mod failure;
mod formatter;
mod linter;
mod rule;

pub use config::{Arguments, Config, DirectiveConfig, RuleConfig};
pub use error::EngineError;
pub use failure::{Failure, FailurePosition, Position, Severity};
pub use formatter::{Formatter, JsonFormatter, get_formatter};
pub use linter::{Engine, Linter, ReadFile};
pub use rule::{File, Rule, RuleSet};

/// Receiving end of a failure stream produced by an [`Engine`].
pub type FailureStream = crossbeam_channel::Receiver<Failure>;
