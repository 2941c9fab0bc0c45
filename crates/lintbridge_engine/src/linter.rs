//! Engine entry point and the reference implementation.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;
use tracing::debug;

use crate::{Config, EngineError, FailureStream, File, Rule};

/// Reads the raw bytes of a source file.
pub type ReadFile = Arc<dyn Fn(&Path) -> std::io::Result<Vec<u8>> + Send + Sync>;

/// Lint execution entry point.
pub trait Engine: Send + Sync {
    /// Lints every file of every package with `rules`.
    ///
    /// The returned stream is closed once all failures have been sent.
    fn lint(
        &self,
        packages: &[Vec<String>],
        rules: &[Arc<dyn Rule>],
        config: &Config,
    ) -> Result<FailureStream, EngineError>;
}

/// Reference engine.
///
/// Source files are read through a dedicated pool whose size bounds the
/// number of files open at once. Rules then run in parallel per file.
pub struct Linter {
    read_file: ReadFile,
    reader_pool: rayon::ThreadPool,
}

impl Linter {
    /// Creates an engine reading from disk.
    ///
    /// `max_open_files` bounds concurrent reads; `0` uses the default pool size.
    pub fn new(max_open_files: usize) -> Result<Self, EngineError> {
        Self::with_reader(Arc::new(|path: &Path| std::fs::read(path)), max_open_files)
    }

    /// Creates an engine reading through `read_file`.
    pub fn with_reader(read_file: ReadFile, max_open_files: usize) -> Result<Self, EngineError> {
        let reader_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(max_open_files)
            .thread_name(|i| format!("lintbridge-reader-{}", i))
            .build()
            .map_err(|e| EngineError::init(format!("Failed to build reader pool: {}", e)))?;

        Ok(Self {
            read_file,
            reader_pool,
        })
    }

    fn read_packages(&self, packages: &[Vec<String>]) -> Result<Vec<File>, EngineError> {
        let names: Vec<&String> = packages.iter().flatten().collect();

        self.reader_pool.install(|| {
            names
                .par_iter()
                .map(|name| {
                    let bytes =
                        (self.read_file)(Path::new(name)).map_err(|e| EngineError::io(*name, e))?;
                    Ok::<_, EngineError>(File::new(
                        name.as_str(),
                        String::from_utf8_lossy(&bytes).into_owned(),
                    ))
                })
                .collect()
        })
    }
}

impl Engine for Linter {
    fn lint(
        &self,
        packages: &[Vec<String>],
        rules: &[Arc<dyn Rule>],
        config: &Config,
    ) -> Result<FailureStream, EngineError> {
        let files = self.read_packages(packages)?;
        debug!("Linting {} files with {} rules", files.len(), rules.len());

        let (tx, rx) = crossbeam_channel::unbounded();

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            files
                .par_iter()
                .filter(|file| {
                    let skip = config.ignore_generated_header && file.is_generated();
                    if skip {
                        debug!("Skipping generated file {}", file.name);
                    }
                    !skip
                })
                .for_each_with(tx.clone(), |tx, file| {
                    for rule in rules {
                        for mut failure in rule.apply(file, config.arguments(rule.name())) {
                            failure.rule_name = rule.name().to_string();
                            if tx.send(failure).is_err() {
                                return;
                            }
                        }
                    }
                });
        }));
        drop(tx);

        outcome.map_err(|payload| EngineError::RulePanicked(panic_message(payload.as_ref())))?;
        Ok(rx)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Failure, FailurePosition, Position, RuleConfig};
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    /// Reports every line containing `needle`.
    struct Contains {
        name: &'static str,
        needle: &'static str,
    }

    impl Rule for Contains {
        fn name(&self) -> &str {
            self.name
        }

        fn apply(&self, file: &File, _arguments: &[toml::Value]) -> Vec<Failure> {
            file.content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(self.needle))
                .map(|(i, _)| {
                    let pos = Position::new(file.name.as_str(), 0, i + 1, 1);
                    Failure::new(
                        format!("found {}", self.needle),
                        FailurePosition {
                            start: pos.clone(),
                            end: pos,
                        },
                    )
                    .with_confidence(0.9)
                })
                .collect()
        }
    }

    /// Reports the number of arguments it received.
    struct CountArguments;

    impl Rule for CountArguments {
        fn name(&self) -> &str {
            "count-arguments"
        }

        fn apply(&self, _file: &File, arguments: &[toml::Value]) -> Vec<Failure> {
            vec![Failure::new(
                arguments.len().to_string(),
                FailurePosition::default(),
            )]
        }
    }

    struct Panics;

    impl Rule for Panics {
        fn name(&self) -> &str {
            "panics"
        }

        fn apply(&self, _file: &File, _arguments: &[toml::Value]) -> Vec<Failure> {
            panic!("boom")
        }
    }

    fn memory_reader(files: &[(&str, &str)]) -> ReadFile {
        let files: HashMap<String, Vec<u8>> = files
            .iter()
            .map(|(name, content)| (name.to_string(), content.as_bytes().to_vec()))
            .collect();
        Arc::new(move |path: &Path| {
            files
                .get(path.to_str().unwrap_or_default())
                .cloned()
                .ok_or_else(|| std::io::Error::from(std::io::ErrorKind::NotFound))
        })
    }

    fn packages(names: &[&str]) -> Vec<Vec<String>> {
        vec![names.iter().map(|n| n.to_string()).collect()]
    }

    #[test]
    fn test_lint_stamps_rule_name() {
        let reader = memory_reader(&[("a.go", "package a\n// TODO\n"), ("b.go", "package b\n")]);
        let linter = Linter::with_reader(reader, 2).unwrap();
        let rules: Vec<Arc<dyn Rule>> = vec![Arc::new(Contains {
            name: "no-todo",
            needle: "TODO",
        })];

        let failures: Vec<Failure> = linter
            .lint(&packages(&["a.go", "b.go"]), &rules, &Config::default())
            .unwrap()
            .iter()
            .collect();

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].rule_name, "no-todo");
        assert_eq!(failures[0].position.start.filename, "a.go");
        assert_eq!(failures[0].position.start.line, 2);
    }

    #[test]
    fn test_lint_passes_rule_arguments() {
        let reader = memory_reader(&[("a.go", "package a\n")]);
        let linter = Linter::with_reader(reader, 0).unwrap();
        let rules: Vec<Arc<dyn Rule>> = vec![Arc::new(CountArguments)];

        let mut config = Config::default();
        config.rules.insert(
            "count-arguments".to_string(),
            RuleConfig {
                arguments: vec![toml::Value::Integer(1), toml::Value::Boolean(true)],
                ..RuleConfig::default()
            },
        );

        let failures: Vec<Failure> = linter
            .lint(&packages(&["a.go"]), &rules, &config)
            .unwrap()
            .iter()
            .collect();

        assert_eq!(failures[0].failure, "2");
    }

    #[test]
    fn test_lint_skips_generated_files_when_configured() {
        let generated = "// Code generated by stringer. DO NOT EDIT.\npackage a\n// TODO\n";
        let reader = memory_reader(&[("gen.go", generated)]);
        let linter = Linter::with_reader(reader, 0).unwrap();
        let rules: Vec<Arc<dyn Rule>> = vec![Arc::new(Contains {
            name: "no-todo",
            needle: "TODO",
        })];

        let mut config = Config::default();
        assert_eq!(
            linter
                .lint(&packages(&["gen.go"]), &rules, &config)
                .unwrap()
                .iter()
                .count(),
            1
        );

        config.ignore_generated_header = true;
        assert_eq!(
            linter
                .lint(&packages(&["gen.go"]), &rules, &config)
                .unwrap()
                .iter()
                .count(),
            0
        );
    }

    #[test]
    fn test_lint_missing_file_is_io_error() {
        let linter = Linter::with_reader(memory_reader(&[]), 0).unwrap();
        let result = linter.lint(&packages(&["missing.go"]), &[], &Config::default());

        match result {
            Err(EngineError::Io { path, .. }) => assert_eq!(path, Path::new("missing.go")),
            other => panic!("Expected Io error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_lint_rule_panic_is_reported() {
        let reader = memory_reader(&[("a.go", "package a\n")]);
        let linter = Linter::with_reader(reader, 0).unwrap();
        let rules: Vec<Arc<dyn Rule>> = vec![Arc::new(Panics)];

        let result = linter.lint(&packages(&["a.go"]), &rules, &Config::default());

        match result {
            Err(EngineError::RulePanicked(message)) => assert_eq!(message, "boom"),
            other => panic!("Expected RulePanicked, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_lint_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.go");
        std::fs::write(&path, "package main\n// TODO: remove\n").unwrap();

        let linter = Linter::new(1).unwrap();
        let rules: Vec<Arc<dyn Rule>> = vec![Arc::new(Contains {
            name: "no-todo",
            needle: "TODO",
        })];
        let name = path.to_string_lossy().to_string();

        let failures: Vec<Failure> = linter
            .lint(&[vec![name.clone()]], &rules, &Config::default())
            .unwrap()
            .iter()
            .collect();

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].position.start.filename, name);
    }
}
