use async_graphql::{Context, Enum, Object, Result as GqlResult, SimpleObject};

use crate::modules::habits::core::category::HabitCategory;
use crate::modules::habits::use_cases::list_habits_by_user::handler::{Paging, list_habits};
use crate::modules::habits::use_cases::list_habits_by_user::projection::HabitView;
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
#[graphql(name = "HabitCategory")]
pub enum GqlHabitCategory {
    Morning,
    Night,
    Any,
}

impl From<HabitCategory> for GqlHabitCategory {
    fn from(category: HabitCategory) -> Self {
        match category {
            HabitCategory::Morning => Self::Morning,
            HabitCategory::Night => Self::Night,
            HabitCategory::Any => Self::Any,
        }
    }
}

impl From<GqlHabitCategory> for HabitCategory {
    fn from(category: GqlHabitCategory) -> Self {
        match category {
            GqlHabitCategory::Morning => Self::Morning,
            GqlHabitCategory::Night => Self::Night,
            GqlHabitCategory::Any => Self::Any,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "Habit")]
pub struct GqlHabit {
    pub habit_id: String,
    pub user_id: String,
    pub name: String,
    pub category: GqlHabitCategory,
    /// Completed days as `YYYY-MM-DD`, oldest first.
    pub completions: Vec<String>,
    pub current_streak: u32,
    pub max_streak: u32,
    pub completed_today: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<HabitView> for GqlHabit {
    fn from(v: HabitView) -> Self {
        Self {
            habit_id: v.habit_id,
            user_id: v.user_id,
            name: v.name,
            category: v.category.into(),
            completions: v.completions.iter().map(ToString::to_string).collect(),
            current_streak: v.current_streak,
            max_streak: v.max_streak,
            completed_today: v.completed_today,
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}

#[derive(Default)]
pub struct HabitsQuery;

#[Object]
impl HabitsQuery {
    async fn habits(
        &self,
        context: &Context<'_>,
        user_id: String,
        offset: Option<i64>,
        limit: Option<i64>,
        sort_desc: Option<bool>,
    ) -> GqlResult<Vec<GqlHabit>> {
        let state = context.data_unchecked::<AppState>();
        let defaults = Paging::default();
        let paging = Paging {
            offset: offset.map_or(defaults.offset, |o| o.max(0) as u64),
            limit: limit.map_or(defaults.limit, |l| l.max(0) as u64),
            sort_desc: sort_desc.unwrap_or(defaults.sort_desc),
        };
        let habits = list_habits(state.queries.as_ref(), &user_id, state.today(), paging).await?;
        Ok(habits.into_iter().map(Into::into).collect())
    }
}
