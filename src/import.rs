use std::path::Path;

use anyhow::Context;
use console::style;

use crate::cli::CommonArgs;
use crate::db::PatternDb;
use crate::store::Contributions;

/// Validate a user-supplied JSON pattern file and store it wholesale.
/// Nothing is written unless the whole file validates.
pub fn exec(common: CommonArgs, file: &Path) -> anyhow::Result<()> {
    let year = common.resolve_year();
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let contributions = Contributions::deserialize(year, &text)
        .with_context(|| format!("Invalid pattern file {}", file.display()))?;

    let mut db =
        PatternDb::new(common.store.as_deref()).context("Failed to open pattern store")?;
    db.save(&contributions).context("Failed to store pattern")?;

    println!(
        "{}",
        style(format!(
            "Imported {} active days into {year}.",
            contributions.active_count()
        ))
        .green()
    );
    Ok(())
}
