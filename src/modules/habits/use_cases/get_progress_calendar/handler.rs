use chrono::NaiveDate;
use thiserror::Error;

use crate::modules::habits::core::streaks::compute_streaks;
use crate::modules::habits::use_cases::get_progress_calendar::view::{
    CalendarDay, DaySummary, HabitDayStatus, ProgressCalendar,
};
use crate::modules::habits::use_cases::list_habits_by_user::projection::HabitRow;
use crate::modules::habits::use_cases::list_habits_by_user::queries_port::HabitQueries;
use crate::shared::core::calendar::{CalendarError, TrackingCalendar};

#[derive(Debug, Error)]
pub enum ProgressCalendarError {
    #[error(transparent)]
    InvalidInput(#[from] CalendarError),

    #[error("habit not found")]
    HabitNotFound,

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressCalendarRequest {
    pub user_id: String,
    pub year: i32,
    pub month: u32,
    pub selected_day: Option<NaiveDate>,
    pub habit_id: Option<String>,
}

/// Lays out one month for the given habits. Pure; `today` only marks a day and
/// anchors the streaks.
pub fn build_progress_calendar(
    habits: &[HabitRow],
    year: i32,
    month: u32,
    selected_day: NaiveDate,
    today: NaiveDate,
) -> Result<ProgressCalendar, CalendarError> {
    let days = TrackingCalendar::month_days(year, month)?
        .into_iter()
        .map(|day| CalendarDay {
            day,
            has_completion: habits.iter().any(|habit| habit.completions.contains(&day)),
            is_today: day == today,
        })
        .collect();

    let statuses: Vec<HabitDayStatus> = habits
        .iter()
        .map(|habit| HabitDayStatus {
            habit_id: habit.habit_id.clone(),
            name: habit.name.clone(),
            category: habit.category,
            completed: habit.completions.contains(&selected_day),
        })
        .collect();
    let completed = statuses.iter().filter(|status| status.completed).count() as u32;
    let total = statuses.len() as u32;

    let best_streak = habits
        .iter()
        .map(|habit| compute_streaks(habit.completions.iter().copied(), today).max_streak)
        .max()
        .unwrap_or(0);

    Ok(ProgressCalendar {
        year,
        month,
        today,
        days,
        summary: DaySummary {
            day: selected_day,
            completed,
            total,
            all_completed: total > 0 && completed == total,
            habits: statuses,
        },
        best_streak,
    })
}

pub async fn progress_calendar(
    queries: &(dyn HabitQueries + Send + Sync),
    request: ProgressCalendarRequest,
    today: NaiveDate,
) -> Result<ProgressCalendar, ProgressCalendarError> {
    // Reject impossible months before touching storage.
    TrackingCalendar::month_days(request.year, request.month)?;

    let habits = match &request.habit_id {
        Some(habit_id) => vec![
            queries
                .get_by_id(&request.user_id, habit_id)
                .await?
                .ok_or(ProgressCalendarError::HabitNotFound)?,
        ],
        None => {
            queries
                .list_by_user_id(&request.user_id, 0, u64::MAX, false)
                .await?
        }
    };

    Ok(build_progress_calendar(
        &habits,
        request.year,
        request.month,
        request.selected_day.unwrap_or(today),
        today,
    )?)
}
