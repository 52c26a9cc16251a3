use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult, SimpleObject};

use crate::modules::habits::use_cases::get_progress_calendar::handler::{
    ProgressCalendarError, ProgressCalendarRequest, progress_calendar,
};
use crate::modules::habits::use_cases::get_progress_calendar::view::{
    CalendarDay, DaySummary, HabitDayStatus, ProgressCalendar,
};
use crate::modules::habits::use_cases::list_habits_by_user::inbound::graphql::GqlHabitCategory;
use crate::shell::graphql::invalid_input;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(name = "CalendarDay")]
pub struct GqlCalendarDay {
    pub day: String,
    pub has_completion: bool,
    pub is_today: bool,
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "HabitDayStatus")]
pub struct GqlHabitDayStatus {
    pub habit_id: String,
    pub name: String,
    pub category: GqlHabitCategory,
    pub completed: bool,
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "DaySummary")]
pub struct GqlDaySummary {
    pub day: String,
    pub completed: u32,
    pub total: u32,
    pub all_completed: bool,
    pub habits: Vec<GqlHabitDayStatus>,
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "ProgressCalendar")]
pub struct GqlProgressCalendar {
    pub year: i32,
    pub month: u32,
    pub today: String,
    pub days: Vec<GqlCalendarDay>,
    pub summary: GqlDaySummary,
    pub best_streak: u32,
}

impl From<CalendarDay> for GqlCalendarDay {
    fn from(d: CalendarDay) -> Self {
        Self {
            day: d.day.to_string(),
            has_completion: d.has_completion,
            is_today: d.is_today,
        }
    }
}

impl From<HabitDayStatus> for GqlHabitDayStatus {
    fn from(s: HabitDayStatus) -> Self {
        Self {
            habit_id: s.habit_id,
            name: s.name,
            category: s.category.into(),
            completed: s.completed,
        }
    }
}

impl From<DaySummary> for GqlDaySummary {
    fn from(s: DaySummary) -> Self {
        Self {
            day: s.day.to_string(),
            completed: s.completed,
            total: s.total,
            all_completed: s.all_completed,
            habits: s.habits.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<ProgressCalendar> for GqlProgressCalendar {
    fn from(c: ProgressCalendar) -> Self {
        Self {
            year: c.year,
            month: c.month,
            today: c.today.to_string(),
            days: c.days.into_iter().map(Into::into).collect(),
            summary: c.summary.into(),
            best_streak: c.best_streak,
        }
    }
}

#[derive(Default)]
pub struct ProgressCalendarQuery;

#[Object]
impl ProgressCalendarQuery {
    async fn progress_calendar(
        &self,
        context: &Context<'_>,
        user_id: String,
        year: i32,
        month: u32,
        selected_day: Option<String>,
        habit_id: Option<String>,
    ) -> GqlResult<GqlProgressCalendar> {
        let state = context.data_unchecked::<AppState>();
        let selected_day = selected_day
            .map(|raw| state.calendar.parse_day(&raw))
            .transpose()
            .map_err(invalid_input)?;

        let request = ProgressCalendarRequest {
            user_id,
            year,
            month,
            selected_day,
            habit_id,
        };
        match progress_calendar(state.queries.as_ref(), request, state.today()).await {
            Ok(calendar) => Ok(calendar.into()),
            Err(ProgressCalendarError::InvalidInput(e)) => Err(invalid_input(e)),
            Err(ProgressCalendarError::HabitNotFound) => Err(async_graphql::Error::new(
                "habit not found",
            )
            .extend_with(|_, ext| ext.set("code", 404))),
            Err(ProgressCalendarError::Backend(e)) => Err(async_graphql::Error::new(e.to_string())),
        }
    }
}
