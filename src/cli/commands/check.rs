//! `check` command: duplicates and missing paths

use anyhow::Result;
use colored::Colorize;

use crate::checker::{check_all, Severity};
use crate::cli::Context;
use crate::parser;

pub fn execute(ctx: &Context) -> Result<()> {
    let buffer = ctx.load_buffer()?;
    let entities = parser::recognize(&buffer);
    let result = check_all(&entities);

    if result.is_ok() {
        ctx.print_success(&format!(
            "No issues found ({} entries checked)",
            entities.len()
        ));
        return Ok(());
    }

    for issue in &result.issues {
        let location = issue
            .line_number
            .map(|l| format!("line {}: ", l + 1))
            .unwrap_or_default();
        let message = format!("{}{}", location.dimmed(), issue.message);
        match issue.severity {
            Severity::Warning => ctx.print_warning(&message),
            Severity::Error => ctx.print_error(&message),
        }
    }

    if result.has_errors() {
        anyhow::bail!("check found errors");
    }
    Ok(())
}
