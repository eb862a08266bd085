use chrono::{Datelike, NaiveDate};

use crate::error::{AssistantError, Result};

/// A calendar date resolved from day/month input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDate {
    pub date: NaiveDate,
    /// The day had already passed this year, so next year was used.
    pub rolled_over: bool,
}

/// Resolve `"DD-MM"` against `today`.
///
/// The current year is used unless that date is before `today`, in which
/// case the following year is used. Today itself is never rolled over.
pub fn resolve_day_month(input: &str, today: NaiveDate) -> Result<ResolvedDate> {
    let invalid = || AssistantError::InvalidDate { input: input.to_string() };

    let (day, month) = input.trim().split_once('-').ok_or_else(invalid)?;
    let day: u32 = day.trim().parse().map_err(|_| invalid())?;
    let month: u32 = month.trim().parse().map_err(|_| invalid())?;

    let this_year = NaiveDate::from_ymd_opt(today.year(), month, day).ok_or_else(invalid)?;
    if this_year >= today {
        return Ok(ResolvedDate { date: this_year, rolled_over: false });
    }

    // 29-02 resolved in a leap year has no counterpart the following year.
    let next_year = this_year.with_year(today.year() + 1).ok_or_else(invalid)?;
    Ok(ResolvedDate { date: next_year, rolled_over: true })
}
