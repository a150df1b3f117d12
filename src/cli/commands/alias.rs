//! Alias editing commands: `add-alias`, `toggle`, `remove`
//!
//! Each command parses the current file, builds a modification batch
//! against that snapshot, and writes. Indices are never carried across a
//! write.

use anyhow::Result;
use dialoguer::Confirm;

use crate::buffer::LineBuffer;
use crate::cli::Context;
use crate::model::{Alias, Entity, EntityKind};
use crate::mutation::{self, Modification};
use crate::parser;
use crate::parser::recognize::strip_trailing_comment;

/// Append a new alias at the end of the file.
pub fn add(ctx: &Context, name: &str, expansion: &str) -> Result<()> {
    let mut buffer = ctx.load_buffer()?;
    let entities = parser::recognize(&buffer);

    if let Some(existing) = find_alias(&entities, name) {
        anyhow::bail!(
            "alias '{}' already defined at line {}",
            name,
            existing.source_line + 1
        );
    }

    let batch = [Modification::AppendLine {
        text: format!("alias {}='{}'", name, expansion),
    }];
    mutation::apply(&mut buffer, &batch)?;
    ctx.write_buffer(&buffer)?;

    ctx.print_success(&format!("Added alias '{}'", name));
    Ok(())
}

/// Comment out an enabled alias, or uncomment a disabled one, touching
/// only its own line.
pub fn toggle(ctx: &Context, name: &str) -> Result<()> {
    let mut buffer = ctx.load_buffer()?;
    let entities = parser::recognize(&buffer);

    let alias = find_alias(&entities, name)
        .ok_or_else(|| anyhow::anyhow!("no alias named '{}'", name))?;
    let index = alias.source_line;
    let line = buffer
        .line(index)
        .ok_or_else(|| anyhow::anyhow!("alias line {} vanished", index + 1))?;

    let text = if alias.enabled {
        comment_out(line)
    } else {
        uncomment(line)
    };

    let batch = [Modification::UpdateLine { index, text }];
    mutation::apply(&mut buffer, &batch)?;
    ctx.write_buffer(&buffer)?;

    let state = if alias.enabled { "Disabled" } else { "Enabled" };
    ctx.print_success(&format!("{} alias '{}'", state, name));
    Ok(())
}

/// Remove an entity. A PATH directory that shares its line with sibling
/// directories is edited out of the `:` list in place; everything else has
/// its whole line range deleted.
pub fn remove(ctx: &Context, kind: &str, name: &str) -> Result<()> {
    let kind: EntityKind = kind.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let mut buffer = ctx.load_buffer()?;
    let entities = parser::recognize(&buffer);

    let entity = entities
        .iter()
        .find(|e| e.kind() == kind && e.name() == name)
        .ok_or_else(|| anyhow::anyhow!("no {} named '{}'", kind, name))?;

    let (start, end) = entity.line_range();
    if !ctx.assume_yes {
        let prompt = format!(
            "Remove {} '{}' (lines {}-{})?",
            kind,
            name,
            start + 1,
            end + 1
        );
        if !Confirm::new().with_prompt(prompt).default(false).interact()? {
            return Ok(());
        }
    }

    let batch = build_removal(&buffer, &entities, entity)?;
    mutation::apply(&mut buffer, &batch)?;
    ctx.write_buffer(&buffer)?;

    ctx.print_success(&format!("Removed {} '{}'", kind, name));
    Ok(())
}

fn build_removal(
    buffer: &LineBuffer,
    entities: &[Entity],
    entity: &Entity,
) -> Result<Vec<Modification>> {
    let (start, end) = entity.line_range();

    if let Entity::PathEntry(path) = entity {
        let has_siblings = entities.iter().any(|e| match e {
            Entity::PathEntry(p) => p.source_line == path.source_line && p.order != path.order,
            _ => false,
        });
        if has_siblings {
            let line = buffer
                .line(start)
                .ok_or_else(|| anyhow::anyhow!("path line {} vanished", start + 1))?;
            let text = remove_path_segment(line, &path.directory).ok_or_else(|| {
                anyhow::anyhow!("could not find '{}' on line {}", path.directory, start + 1)
            })?;
            return Ok(vec![Modification::UpdateLine { index: start, text }]);
        }
    }

    Ok((start..=end)
        .map(|index| Modification::DeleteLine { index })
        .collect())
}

/// Rewrite a PATH line with one directory removed from its `:` list.
/// Surrounding quotes and a trailing comment are kept as written.
fn remove_path_segment(line: &str, directory: &str) -> Option<String> {
    let eq = line.find('=')?;
    let prefix = &line[..eq + 1];
    let value = &line[eq + 1..];
    let kept = strip_trailing_comment(value);
    let suffix = &value[kept.len()..];

    let quoted = kept.len() >= 2
        && ((kept.starts_with('"') && kept.ends_with('"'))
            || (kept.starts_with('\'') && kept.ends_with('\'')));
    let (open, inner, close) = if quoted {
        (&kept[..1], &kept[1..kept.len() - 1], &kept[kept.len() - 1..])
    } else {
        ("", kept, "")
    };

    let mut segments: Vec<&str> = inner.split(':').collect();
    let at = segments.iter().position(|s| s.trim() == directory)?;
    segments.remove(at);

    Some(format!(
        "{}{}{}{}{}",
        prefix,
        open,
        segments.join(":"),
        close,
        suffix
    ))
}

fn find_alias<'a>(entities: &'a [Entity], name: &str) -> Option<&'a Alias> {
    entities.iter().find_map(|e| match e {
        Entity::Alias(a) if a.name == name => Some(a),
        _ => None,
    })
}

/// Place a `# ` marker after the line's indentation, so uncommenting can
/// restore the original bytes.
fn comment_out(line: &str) -> String {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];
    format!("{}# {}", indent, trimmed)
}

/// Strip the comment marker and at most one following space, keeping the
/// line's indentation.
fn uncomment(line: &str) -> String {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];
    let body = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let body = body.strip_prefix(' ').unwrap_or(body);
    format!("{}{}", indent, body)
}
