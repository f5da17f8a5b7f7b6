use serde_json::Value;

use crate::calendar;
use crate::error::{GpaintError, Result};
use crate::model::{Commit, ContributionDay, DEFAULT_COMMIT_MESSAGE};

/// The full ordered set of contribution days for one year.
///
/// Length always equals the year's day count; construction and wholesale
/// replacement validate it, so day indices map 1:1 onto calendar positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contributions {
    year: i32,
    days: Vec<ContributionDay>,
}

impl Contributions {
    /// Fresh all-inactive sequence for `year`.
    pub fn new(year: i32) -> Self {
        let days = vec![ContributionDay::inactive(); calendar::total_days(year)];
        Self { year, days }
    }

    /// Wholesale replacement; rejects a wrong-length or inconsistent set.
    pub fn from_days(year: i32, days: Vec<ContributionDay>) -> Result<Self> {
        let expected = calendar::total_days(year);
        if days.len() != expected {
            return Err(GpaintError::Validation(format!(
                "expected {expected} day entries for {year}, found {}",
                days.len()
            )));
        }
        for (index, day) in days.iter().enumerate() {
            if day.has_contribution != day.commit.is_some() {
                return Err(GpaintError::Validation(format!(
                    "day {index}: commit presence does not match the activity flag"
                )));
            }
        }
        Ok(Self { year, days })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn days(&self) -> &[ContributionDay] {
        &self.days
    }

    pub fn day(&self, index: usize) -> Result<&ContributionDay> {
        self.days.get(index).ok_or(GpaintError::Index {
            index,
            len: self.days.len(),
        })
    }

    pub fn active_count(&self) -> usize {
        self.days.iter().filter(|d| d.has_contribution).count()
    }

    /// Flip the day at `index`, attaching the default commit on activation
    /// and dropping the commit on deactivation. Returns the new flag.
    ///
    /// Re-activating a day restores the default message, not a previously
    /// customized one.
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        let len = self.days.len();
        let year = self.year;
        let day = self
            .days
            .get_mut(index)
            .ok_or(GpaintError::Index { index, len })?;
        if day.has_contribution {
            day.has_contribution = false;
            day.commit = None;
            Ok(false)
        } else {
            let date = calendar::format_git_date(year, index)?;
            day.has_contribution = true;
            day.commit = Some(Commit {
                message: DEFAULT_COMMIT_MESSAGE.to_string(),
                date,
            });
            Ok(true)
        }
    }

    /// Replace the message on an active day; the stored date is untouched.
    pub fn set_message(&mut self, index: usize, message: &str) -> Result<()> {
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return Err(GpaintError::Validation(
                "commit message must not be empty".to_string(),
            ));
        }
        let len = self.days.len();
        let year = self.year;
        let day = self
            .days
            .get_mut(index)
            .ok_or(GpaintError::Index { index, len })?;
        if !day.has_contribution {
            return Err(GpaintError::State(format!(
                "day {index} has no contribution to edit"
            )));
        }
        match day.commit.as_mut() {
            Some(commit) => commit.message = trimmed.to_string(),
            // the invariant says this is Some; repair rather than panic
            None => {
                day.commit = Some(Commit {
                    message: trimmed.to_string(),
                    date: calendar::format_git_date(year, index)?,
                });
            }
        }
        Ok(())
    }

    /// Canonical wire encoding: a compact JSON array in calendar order.
    pub fn serialize(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.days)?)
    }

    pub fn deserialize(year: i32, text: &str) -> Result<Self> {
        let days = deserialize_days(text, calendar::total_days(year))?;
        Self::from_days(year, days)
    }
}

/// Parse and exhaustively validate a JSON day array before any assignment.
///
/// Malformed text is a `Parse` error; a parsed document with the wrong
/// shape or length is a `Validation` error. Never yields a partial result.
pub fn deserialize_days(text: &str, expected_len: usize) -> Result<Vec<ContributionDay>> {
    let value: Value = serde_json::from_str(text)?;
    let items = value.as_array().ok_or_else(|| {
        GpaintError::Validation("expected a JSON array of day entries".to_string())
    })?;
    if items.len() != expected_len {
        return Err(GpaintError::Validation(format!(
            "expected an array of {expected_len} day entries, found {}",
            items.len()
        )));
    }
    for (index, item) in items.iter().enumerate() {
        let obj = item
            .as_object()
            .ok_or_else(|| GpaintError::Validation(format!("day {index}: entry is not an object")))?;
        let flag = obj
            .get("hasContribution")
            .and_then(Value::as_bool)
            .ok_or_else(|| {
                GpaintError::Validation(format!(
                    "day {index}: missing boolean \"hasContribution\""
                ))
            })?;
        match obj.get("commit") {
            None | Some(Value::Null) => {
                if flag {
                    return Err(GpaintError::Validation(format!(
                        "day {index}: active day has no commit"
                    )));
                }
            }
            Some(commit) => {
                let commit = commit.as_object().ok_or_else(|| {
                    GpaintError::Validation(format!("day {index}: \"commit\" is not an object"))
                })?;
                if !commit.get("message").is_some_and(Value::is_string) {
                    return Err(GpaintError::Validation(format!(
                        "day {index}: commit is missing \"message\""
                    )));
                }
                if !commit.get("date").is_some_and(Value::is_string) {
                    return Err(GpaintError::Validation(format!(
                        "day {index}: commit is missing \"date\""
                    )));
                }
                if !flag {
                    return Err(GpaintError::Validation(format!(
                        "day {index}: inactive day carries a commit"
                    )));
                }
            }
        }
    }
    Ok(serde_json::from_value(value)?)
}
