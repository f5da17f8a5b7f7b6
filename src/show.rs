use anyhow::Context;
use console::style;

use crate::calendar::{self, MONTHS};
use crate::cli::CommonArgs;
use crate::db::PatternDb;
use crate::store::Contributions;

pub fn exec(common: CommonArgs) -> anyhow::Result<()> {
    let year = common.resolve_year();
    let db = PatternDb::new(common.store.as_deref()).context("Failed to open pattern store")?;
    let stored = db.load(year).context("Failed to load stored pattern")?;
    let is_stored = stored.is_some();
    let contributions = stored.unwrap_or_else(|| Contributions::new(year));

    println!("{}", style(format!("Pattern Summary for {year}")).bold());
    println!("{}", "─".repeat(50));

    let active = contributions.active_count();
    let custom = contributions
        .days()
        .iter()
        .filter(|d| d.has_custom_message())
        .count();

    println!(
        "Days: {} ({})",
        style(contributions.len()).cyan(),
        if calendar::is_leap_year(year) {
            "leap year"
        } else {
            "common year"
        }
    );
    println!(
        "Stored pattern: {}",
        if is_stored {
            style("yes").green()
        } else {
            style("no").yellow()
        }
    );
    println!("Active days: {}", style(active).green());
    println!("Custom messages: {}", style(custom).cyan());
    println!("Grid weeks: {}", style(calendar::weeks_needed(year)).cyan());

    let first = contributions
        .days()
        .iter()
        .position(|d| d.has_contribution);
    let last = contributions
        .days()
        .iter()
        .rposition(|d| d.has_contribution);
    if let (Some(first), Some(last)) = (first, last) {
        if let (Ok((fm, fd)), Ok((lm, ld))) = (
            calendar::day_of_year_to_date(year, first),
            calendar::day_of_year_to_date(year, last),
        ) {
            println!(
                "Active span: {} to {}",
                style(format!("{} {}", MONTHS[fm as usize], fd)).dim(),
                style(format!("{} {}", MONTHS[lm as usize], ld)).dim()
            );
        }
    }

    if active == 0 {
        println!("\nToggle days in the editor: gpaint --year {year} edit");
    } else {
        println!("\nUse the export command to print the git commands for this pattern.");
    }
    Ok(())
}
