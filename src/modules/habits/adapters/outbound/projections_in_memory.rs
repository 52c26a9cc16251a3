use crate::modules::habits::adapters::outbound::projections::{
    HabitProjectionRepository, WatermarkRepository,
};
use crate::modules::habits::use_cases::list_habits_by_user::projection::{HabitPatch, HabitRow};
use crate::modules::habits::use_cases::list_habits_by_user::queries_port::HabitQueries;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryProjections {
    rows: RwLock<HashMap<(String, String), HabitRow>>,
    watermark: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl HabitProjectionRepository for InMemoryProjections {
    async fn upsert(&self, row: HabitRow) -> anyhow::Result<bool> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Projections repository offline"));
        }

        let mut guard = self.rows.write().await;
        let key = (row.user_id.clone(), row.habit_id.clone());
        if guard.get(&key).is_some_and(|current| current.version >= row.version) {
            tracing::debug!(habit_id = %row.habit_id, version = row.version, "stale upsert, skipping");
            return Ok(false);
        }
        guard.insert(key, row);
        Ok(true)
    }

    async fn patch(&self, patch: HabitPatch) -> anyhow::Result<bool> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Projections repository offline"));
        }

        let mut guard = self.rows.write().await;
        let key = (patch.user_id.clone(), patch.habit_id.clone());
        let row = guard
            .get_mut(&key)
            .ok_or_else(|| anyhow::anyhow!("No projected habit {} to patch", patch.habit_id))?;
        let version = patch.version;
        let applied = row.apply_patch(patch);
        if !applied {
            tracing::debug!(habit_id = %row.habit_id, version, current = row.version, "stale patch, skipping");
        }
        Ok(applied)
    }
}

#[async_trait::async_trait]
impl WatermarkRepository for InMemoryProjections {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Watermark repository offline"));
        }

        Ok(self.watermark.read().await.get(name).cloned())
    }

    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Watermark repository offline"));
        }

        self.watermark
            .write()
            .await
            .insert(name.to_string(), last.to_string());
        Ok(())
    }
}

#[async_trait::async_trait]
impl HabitQueries for InMemoryProjections {
    async fn list_by_user_id(
        &self,
        user_id: &str,
        offset: u64,
        limit: u64,
        sort_by_created_at_desc: bool,
    ) -> anyhow::Result<Vec<HabitRow>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Projections repository offline"));
        }

        let guard = self.rows.read().await;
        let mut items: Vec<HabitRow> = guard
            .iter()
            .filter(|((uid, _), row)| uid == user_id && row.deleted_at.is_none())
            .map(|(_, row)| row.clone())
            .collect();

        items.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.habit_id.cmp(&b.habit_id))
        });
        if sort_by_created_at_desc {
            items.reverse();
        }

        Ok(items
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .collect())
    }

    async fn get_by_id(&self, user_id: &str, habit_id: &str) -> anyhow::Result<Option<HabitRow>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Projections repository offline"));
        }

        let guard = self.rows.read().await;
        Ok(guard
            .get(&(user_id.to_string(), habit_id.to_string()))
            .filter(|row| row.deleted_at.is_none())
            .cloned())
    }
}
