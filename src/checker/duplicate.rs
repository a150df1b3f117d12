//! Duplicate definition detection
//!
//! Later shell definitions silently shadow earlier ones, which is almost
//! always an editing accident in an RC file. Disabled aliases do not
//! shadow anything and are ignored.

use std::collections::HashMap;

use super::{CheckIssue, CheckResult, Checker};
use crate::model::{Entity, EntityKind};

pub struct DuplicateChecker;

impl Checker for DuplicateChecker {
    fn check(&self, entities: &[Entity]) -> CheckResult {
        let mut result = CheckResult::new();
        let mut seen: HashMap<(EntityKind, &str), usize> = HashMap::new();

        for entity in entities {
            let name = match entity {
                Entity::Alias(a) if a.enabled => a.name.as_str(),
                Entity::Function(f) => f.name.as_str(),
                Entity::ExportedVariable(v) => v.name.as_str(),
                _ => continue,
            };
            let line = entity.line_range().0;

            if let Some(first_line) = seen.insert((entity.kind(), name), line) {
                result.add_issue(
                    CheckIssue::warning(format!(
                        "Duplicate {} '{}' (first defined at line {})",
                        entity.kind(),
                        name,
                        first_line + 1
                    ))
                    .with_line(line)
                    .with_entity(name),
                );
            }
        }

        result
    }
}
