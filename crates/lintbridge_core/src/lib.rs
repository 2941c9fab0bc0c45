//! # lintbridge_core
//!
//! Bridges host linter settings and the revive rule engine.
//!
//! This crate provides:
//! - Settings loading and mapping onto the engine's native configuration
//! - Configuration normalization (defaults, enable-all, severity inheritance)
//! - The per-unit lint pipeline with its formatting stage
//! - Conversion of engine failures into host issues
//! - Thread-safe issue collection across units
//!
//! ## Example
//!
//! ```rust,ignore
//! use lintbridge_core::{Package, ReviveLinter, ReviveSettings};
//!
//! let settings = ReviveSettings::from_file(".revive.yml")?;
//! let linter = ReviveLinter::new(settings, rules)?;
//!
//! let failures = linter.run_units(&[Package::new("main", ["main.go"])]);
//! for issue in linter.issues() {
//!     println!("{}:{}: {}", issue.pos.filename, issue.pos.line, issue.text);
//! }
//! ```

mod collector;
pub mod config_map;
mod converter;
mod error;
mod issue;
mod linter;
pub mod normalize;
pub mod registry;
pub mod resolver;
mod runner;
mod settings;

pub use collector::IssueCollector;
pub use converter::{RawFailure, to_issue};
pub use error::LintError;
pub use issue::{Issue, LineRange};
pub use linter::{LINTER_DESCRIPTION, LINTER_NAME, LoadMode, ReviveLinter, UnitFailures};
pub use runner::{CompilationUnit, Package, decode_results, format_failures, run_revive};
pub use settings::{DirectiveSettings, ReviveSettings, RuleSettings};

pub use lintbridge_engine::{Config, Position, Severity};
