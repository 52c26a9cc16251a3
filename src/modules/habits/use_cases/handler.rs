use crate::modules::habits::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::habits::core::decision::{DecideError, Decision};
use crate::modules::habits::core::events::HabitEvent;
use crate::modules::habits::core::evolve::evolve;
use crate::modules::habits::core::state::{ActiveHabit, HabitState};
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    EventStore(#[from] EventStoreError),

    #[error(transparent)]
    Outbox(#[from] OutboxError),

    #[error("domain rejected: {0}")]
    Domain(DecideError),
}

/// Outcome of an accepted command: the appended events, the stream version they
/// were appended after, and the habit state once they are applied.
#[derive(Debug, Clone)]
pub struct Committed {
    pub stream_id: String,
    pub events: Vec<HabitEvent>,
    pub starting_version: i64,
    pub state: HabitState,
}

impl Committed {
    pub fn active(&self) -> Option<&ActiveHabit> {
        match &self.state {
            HabitState::Active(habit) => Some(habit),
            _ => None,
        }
    }
}

pub fn stream_id(habit_id: &str) -> String {
    format!("Habit-{habit_id}")
}

/// Runs habit commands: load, fold, decide, append, then enqueue outbox rows.
/// Each use case adds its own entry point on top of [`HabitCommandHandler::execute`].
pub struct HabitCommandHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<HabitEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    topic: String,
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
}

impl<TEventStore, TOutbox> HabitCommandHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<HabitEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<TEventStore>,
        outbox: Arc<TOutbox>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
        }
    }

    pub async fn execute<F>(&self, stream_id: &str, decide: F) -> Result<Committed, ApplicationError>
    where
        F: FnOnce(&HabitState) -> Decision + Send,
    {
        let stream = self
            .event_store
            .load(stream_id)
            .await
            .map_err(ApplicationError::EventStore)?;

        let state = stream
            .events
            .iter()
            .cloned()
            .fold(HabitState::None, evolve);

        match decide(&state) {
            Decision::Accepted { events, intents } => {
                self.event_store
                    .append(stream_id, stream.version, &events)
                    .await
                    .map_err(ApplicationError::EventStore)?;
                dispatch_intents(
                    &*self.outbox,
                    stream_id,
                    stream.version,
                    &self.topic,
                    intents,
                )
                .await
                .map_err(ApplicationError::Outbox)?;

                tracing::info!(
                    stream_id,
                    version = stream.version + events.len() as i64,
                    "habit command accepted"
                );
                let state = events.iter().cloned().fold(state, evolve);
                Ok(Committed {
                    stream_id: stream_id.to_string(),
                    events,
                    starting_version: stream.version,
                    state,
                })
            }
            Decision::Rejected { reason } => {
                tracing::info!(stream_id, %reason, "habit command rejected");
                Err(ApplicationError::Domain(reason))
            }
        }
    }
}
