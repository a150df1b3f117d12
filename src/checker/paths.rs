//! Missing path detection
//!
//! Validates that PATH directories and source targets exist on disk. Each
//! entry is checked independently and read-only. Paths that still contain
//! shell variables after home expansion cannot be resolved here and are
//! skipped rather than reported.

use std::path::Path;

use super::{CheckIssue, CheckResult, Checker};
use crate::model::Entity;
use crate::utils::path::expand_home;

pub struct PathChecker;

impl Checker for PathChecker {
    fn check(&self, entities: &[Entity]) -> CheckResult {
        let mut result = CheckResult::new();

        for entity in entities {
            match entity {
                Entity::PathEntry(entry) => {
                    let resolved = expand_home(&entry.directory);
                    if resolved.contains('$') {
                        continue;
                    }
                    if !Path::new(&resolved).is_dir() {
                        result.add_issue(
                            CheckIssue::warning(format!(
                                "PATH directory does not exist: {}",
                                entry.directory
                            ))
                            .with_line(entry.source_line)
                            .with_entity(&entry.directory),
                        );
                    }
                }
                Entity::SourceDirective(src) => {
                    if src.target.contains('$') {
                        continue;
                    }
                    if !Path::new(&src.target).is_file() {
                        result.add_issue(
                            CheckIssue::error(format!(
                                "Sourced file does not exist: {}",
                                src.raw_target
                            ))
                            .with_line(src.source_line)
                            .with_entity(&src.raw_target),
                        );
                    }
                }
                _ => {}
            }
        }

        result
    }
}
