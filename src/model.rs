use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// Message attached when a day is first activated.
pub const DEFAULT_COMMIT_MESSAGE: &str = "Initial commit";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub message: String,
    pub date: String,
}

/// One calendar day's activity record. `commit` is `Some` exactly when
/// `has_contribution` is set; the pair flips together in toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    pub has_contribution: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<Commit>,
}

impl ContributionDay {
    pub fn inactive() -> Self {
        Self {
            has_contribution: false,
            commit: None,
        }
    }

    /// Whether the record carries a message other than the activation default.
    pub fn has_custom_message(&self) -> bool {
        self.commit
            .as_ref()
            .is_some_and(|c| c.message != DEFAULT_COMMIT_MESSAGE)
    }
}
