//! `list` command: print recognized entities

use anyhow::Result;
use colored::Colorize;

use crate::cli::Context;
use crate::model::{Entity, EntityKind};
use crate::parser;
use crate::utils::path::contract_home;

pub fn execute(ctx: &Context, kind: Option<&str>) -> Result<()> {
    let filter: Option<EntityKind> = match kind {
        Some(k) => Some(k.parse().map_err(|e: String| anyhow::anyhow!(e))?),
        None => None,
    };

    let buffer = ctx.load_buffer()?;
    let entities = parser::recognize(&buffer);

    let mut shown = 0;
    for entity in &entities {
        if let Some(wanted) = filter {
            if entity.kind() != wanted {
                continue;
            }
        }
        println!("{}", render(entity));
        shown += 1;
    }

    if shown == 0 {
        println!("{}", "(no entries)".dimmed());
    }

    Ok(())
}

fn render(entity: &Entity) -> String {
    let (start, end) = entity.line_range();
    let lines = if start == end {
        format!("L{}", start + 1)
    } else {
        format!("L{}-L{}", start + 1, end + 1)
    };
    let tag = format!("[{}]", entity.kind()).cyan();

    match entity {
        Entity::Alias(a) => {
            let state = if a.enabled {
                String::new()
            } else {
                format!(" {}", "(disabled)".dimmed())
            };
            format!("{:<6} {:>8}  {} = {}{}", lines, tag, a.name.bold(), a.expansion, state)
        }
        Entity::Function(f) => {
            let total = f.line_range.1 - f.line_range.0 + 1;
            format!("{:<6} {:>8}  {}() ({} lines)", lines, tag, f.name.bold(), total)
        }
        Entity::ExportedVariable(v) => {
            let note = if v.keychain_backed {
                format!(" {}", "(keychain)".yellow())
            } else {
                String::new()
            };
            format!("{:<6} {:>8}  {} = {}{}", lines, tag, v.name.bold(), v.value, note)
        }
        Entity::PathEntry(p) => format!(
            "{:<6} {:>8}  #{} {}",
            lines,
            tag,
            p.order,
            contract_home(&p.directory)
        ),
        Entity::SourceDirective(s) => {
            let guard = if s.guarded {
                format!(" {}", "(guarded)".dimmed())
            } else {
                String::new()
            };
            format!("{:<6} {:>8}  {}{}", lines, tag, s.raw_target, guard)
        }
    }
}
