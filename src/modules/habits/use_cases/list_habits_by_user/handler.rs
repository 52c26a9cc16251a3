use chrono::NaiveDate;

use crate::modules::habits::use_cases::list_habits_by_user::projection::HabitView;
use crate::modules::habits::use_cases::list_habits_by_user::queries_port::HabitQueries;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub offset: u64,
    pub limit: u64,
    pub sort_desc: bool,
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 20,
            sort_desc: true,
        }
    }
}

pub async fn list_habits(
    queries: &(dyn HabitQueries + Send + Sync),
    user_id: &str,
    today: NaiveDate,
    paging: Paging,
) -> anyhow::Result<Vec<HabitView>> {
    let rows = queries
        .list_by_user_id(user_id, paging.offset, paging.limit, paging.sort_desc)
        .await?;
    Ok(rows
        .into_iter()
        .map(|row| HabitView::from_row(row, today))
        .collect())
}
