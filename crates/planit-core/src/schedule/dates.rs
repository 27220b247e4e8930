//! Calendar-day arithmetic and per-task date placement.

use jiff::{civil::Date, Span};

use crate::{error::Result, models::Task};

/// Adds a (possibly negative) number of whole days to a date.
pub fn add_days(date: Date, days: i64) -> Result<Date> {
    Ok(date.checked_add(Span::new().try_days(days)?)?)
}

/// Whole days from `start` to `end`; negative when `end` precedes `start`.
pub fn days_between(start: Date, end: Date) -> Result<i64> {
    Ok(i64::from(start.until(end)?.get_days()))
}

/// Fixes a task's dates given its earliest possible start.
///
/// The task ends `duration_days` after `start`. When that overruns
/// `window_end`, the duration is clamped to the days left in the window,
/// floored at one day, so a task starting at or after the window end still
/// gets a single day and ends past it.
pub(crate) fn place(task: &mut Task, start: Date, window_end: Date) -> Result<()> {
    task.duration_days = task.duration_days.max(1);

    // Clamp before any date arithmetic so oversized durations never leave
    // the calendar range.
    let available = days_between(start, window_end)?;
    if i64::from(task.duration_days) > available {
        task.duration_days = u32::try_from(available.max(1)).unwrap_or(1);
    }
    let end = add_days(start, i64::from(task.duration_days))?;

    task.start_date = Some(start);
    task.end_date = Some(end);
    task.deadline = Some(end);
    Ok(())
}
