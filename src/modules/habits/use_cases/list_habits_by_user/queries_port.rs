use crate::modules::habits::use_cases::list_habits_by_user::projection::HabitRow;
use async_trait::async_trait;

/// Read access to the habit projection. Deleted habits are never returned.
#[async_trait]
pub trait HabitQueries {
    async fn list_by_user_id(
        &self,
        user_id: &str,
        offset: u64,
        limit: u64,
        sort_by_created_at_desc: bool,
    ) -> anyhow::Result<Vec<HabitRow>>;

    async fn get_by_id(&self, user_id: &str, habit_id: &str) -> anyhow::Result<Option<HabitRow>>;
}
