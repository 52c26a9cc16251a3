use crate::modules::habits::use_cases::list_habits_by_user::projection::{HabitPatch, HabitRow};
use async_trait::async_trait;

/// Writes to the habit read model. Both operations report whether the row changed:
/// a mutation carrying a stream version the row already reached is skipped.
#[async_trait]
pub trait HabitProjectionRepository: Send + Sync {
    async fn upsert(&self, row: HabitRow) -> anyhow::Result<bool>;
    async fn patch(&self, patch: HabitPatch) -> anyhow::Result<bool>;
}

#[async_trait]
pub trait WatermarkRepository: Send + Sync {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()>;
}
