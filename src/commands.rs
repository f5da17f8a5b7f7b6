use crate::model::Commit;
use crate::store::Contributions;

/// Render one commit as its replayable git command. Only literal quotes in
/// the message are escaped; the format is fixed and reproduced byte-for-byte.
pub fn command_for(commit: &Commit) -> String {
    let escaped = commit.message.replace('"', "\\\"");
    format!(
        "GIT_AUTHOR_DATE=\"{date}\" GIT_COMMITTER_DATE=\"{date}\" git commit --allow-empty -m \"{escaped}\"",
        date = commit.date
    )
}

/// Commands for every active day in ascending calendar order, separated by
/// a blank line. Empty output means nothing to export, not an error.
pub fn commands_for_all(contributions: &Contributions) -> String {
    contributions
        .days()
        .iter()
        .filter(|day| day.has_contribution)
        .filter_map(|day| day.commit.as_ref())
        .map(command_for)
        .collect::<Vec<_>>()
        .join("\n\n")
}
