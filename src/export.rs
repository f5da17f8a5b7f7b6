use std::path::PathBuf;

use anyhow::Context;
use console::style;

use crate::cli::CommonArgs;
use crate::commands::commands_for_all;
use crate::db::PatternDb;
use crate::error::{GpaintError, Result};
use crate::store::Contributions;

pub fn exec(
    common: CommonArgs,
    json: bool,
    output: Option<PathBuf>,
    copy: bool,
) -> anyhow::Result<()> {
    let year = common.resolve_year();
    let db = PatternDb::new(common.store.as_deref()).context("Failed to open pattern store")?;
    let contributions = db
        .load(year)
        .context("Failed to load stored pattern")?
        .unwrap_or_else(|| Contributions::new(year));

    let text = if json {
        contributions
            .serialize()
            .context("Failed to serialize pattern")?
    } else {
        commands_for_all(&contributions)
    };

    if !json && text.is_empty() {
        println!(
            "{}",
            style(format!("No active days in {year}; nothing to export.")).yellow()
        );
        return Ok(());
    }

    if copy {
        copy_to_clipboard(&text).context("Failed to copy to clipboard")?;
        println!(
            "{}",
            style(format!(
                "Copied {} to the clipboard.",
                describe(&contributions, json)
            ))
            .green()
        );
    }

    match output {
        Some(path) => {
            std::fs::write(&path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "{}",
                style(format!(
                    "Wrote {} to {}.",
                    describe(&contributions, json),
                    path.display()
                ))
                .green()
            );
        }
        None if !copy => println!("{text}"),
        None => {}
    }

    Ok(())
}

fn describe(contributions: &Contributions, json: bool) -> String {
    if json {
        format!("the {}-day JSON array", contributions.len())
    } else {
        format!("{} commit commands", contributions.active_count())
    }
}

pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| GpaintError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| GpaintError::Clipboard(e.to_string()))
}
