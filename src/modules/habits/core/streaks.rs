// Streak computation over a habit's completion days.
//
// Purpose
// - One canonical answer for the current and the longest streak, used by the command path
//   (cached streak refresh) and by every read path.
//
// Boundaries
// - Pure. No clock reads, no logging. The reference day is always passed in.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::shared::core::calendar::{CalendarError, TrackingCalendar};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StreakResult {
    pub current_streak: u32,
    pub max_streak: u32,
}

/// Computes both streaks for a collection of completion days.
///
/// Input order and duplicates do not matter. Days after `reference_today` still count for
/// `max_streak` but never anchor `current_streak`.
pub fn compute_streaks<I>(completion_days: I, reference_today: NaiveDate) -> StreakResult
where
    I: IntoIterator<Item = NaiveDate>,
{
    let days: BTreeSet<NaiveDate> = completion_days.into_iter().collect();
    if days.is_empty() {
        return StreakResult::default();
    }
    StreakResult {
        current_streak: current_run(&days, reference_today),
        max_streak: longest_run(&days),
    }
}

/// Parses every raw entry with the tracking calendar, then computes streaks.
/// A single malformed entry rejects the whole call.
pub fn compute_streaks_from_raw<S>(
    entries: &[S],
    reference_today: NaiveDate,
    calendar: &TrackingCalendar,
) -> Result<StreakResult, CalendarError>
where
    S: AsRef<str>,
{
    let days = entries
        .iter()
        .map(|raw| calendar.parse_day(raw.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(compute_streaks(days, reference_today))
}

fn longest_run(days: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;
    for &day in days {
        run = match previous {
            Some(prev) if prev.succ_opt() == Some(day) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }
    longest
}

fn current_run(days: &BTreeSet<NaiveDate>, reference_today: NaiveDate) -> u32 {
    let Some(&anchor) = days.range(..=reference_today).next_back() else {
        return 0;
    };
    let yesterday = reference_today.pred_opt().unwrap_or(reference_today);
    if anchor < yesterday {
        return 0;
    }

    let mut run = 1;
    let mut expected = anchor.pred_opt();
    for &day in days.range(..anchor).rev() {
        if Some(day) != expected {
            break;
        }
        run += 1;
        expected = day.pred_opt();
    }
    run
}
