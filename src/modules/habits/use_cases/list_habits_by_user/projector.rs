use crate::modules::habits::adapters::outbound::projections::{
    HabitProjectionRepository, WatermarkRepository,
};
use crate::modules::habits::core::events::HabitEvent;
use crate::modules::habits::core::projections::{Mutation, apply};
use std::sync::Arc;

#[derive(Clone)]
pub struct Projector<TRepository, TWatermarkRepository>
where
    TRepository: HabitProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub name: String,
    pub repository: Arc<TRepository>,
    pub watermark_repository: Arc<TWatermarkRepository>,
}

impl<TRepository, TWatermarkRepository> Projector<TRepository, TWatermarkRepository>
where
    TRepository: HabitProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub fn new(
        name: impl Into<String>,
        repository: Arc<TRepository>,
        watermark: Arc<TWatermarkRepository>,
    ) -> Self {
        Self {
            name: name.into(),
            repository,
            watermark_repository: watermark,
        }
    }

    /// Applies one event. The watermark only advances when the read model actually
    /// changed, so a late event from a concurrent request never moves it backwards.
    pub async fn apply_one(
        &self,
        stream_id: &str,
        version: i64,
        event: &HabitEvent,
    ) -> anyhow::Result<()> {
        let mut applied = false;
        for mutation in apply(stream_id, version, event) {
            applied |= match mutation {
                Mutation::Upsert(row) => self.repository.upsert(row).await?,
                Mutation::Patch(patch) => self.repository.patch(patch).await?,
            };
        }
        if !applied {
            tracing::debug!(projector = %self.name, stream_id, version, "already projected");
            return Ok(());
        }
        self.watermark_repository
            .set(&self.name, &format!("{stream_id}:{version}"))
            .await?;
        Ok(())
    }

    /// Projects events that were appended right after `starting_version`, in order.
    pub async fn apply_committed(
        &self,
        stream_id: &str,
        starting_version: i64,
        events: &[HabitEvent],
    ) -> anyhow::Result<()> {
        for (offset, event) in events.iter().enumerate() {
            let version = starting_version + offset as i64 + 1;
            self.apply_one(stream_id, version, event).await?;
        }
        tracing::debug!(projector = %self.name, stream_id, count = events.len(), "projected");
        Ok(())
    }
}
