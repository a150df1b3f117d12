//! Checker module for validating recognized entities

mod duplicate;
mod paths;

pub use duplicate::DuplicateChecker;
pub use paths::PathChecker;

use crate::model::Entity;

/// Check result
#[derive(Debug, Default)]
pub struct CheckResult {
    pub issues: Vec<CheckIssue>,
}

impl CheckResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_issue(&mut self, issue: CheckIssue) {
        self.issues.push(issue);
    }

    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i.severity, Severity::Error))
    }

    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Issue severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A single check issue
#[derive(Debug)]
pub struct CheckIssue {
    pub severity: Severity,
    pub message: String,
    pub line_number: Option<usize>,
    pub entity_name: Option<String>,
}

impl CheckIssue {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            line_number: None,
            entity_name: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            line_number: None,
            entity_name: None,
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line_number = Some(line);
        self
    }

    pub fn with_entity(mut self, name: impl Into<String>) -> Self {
        self.entity_name = Some(name.into());
        self
    }
}

/// Trait for checkers
pub trait Checker {
    fn check(&self, entities: &[Entity]) -> CheckResult;
}

/// Run all checks on recognized entities.
///
/// Filesystem-backed checks look at each entry independently; there is no
/// ordering requirement between them.
pub fn check_all(entities: &[Entity]) -> CheckResult {
    let mut result = CheckResult::new();

    for checker in [&DuplicateChecker as &dyn Checker, &PathChecker] {
        result.issues.extend(checker.check(entities).issues);
    }

    result
}
