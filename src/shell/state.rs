use crate::modules::habits::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::habits::core::events::HabitEvent;
use crate::modules::habits::use_cases::handler::{Committed, HabitCommandHandler};
use crate::modules::habits::use_cases::list_habits_by_user::projector::Projector;
use crate::modules::habits::use_cases::list_habits_by_user::queries_port::HabitQueries;
use crate::shared::core::calendar::{Clock, TrackingCalendar};
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use chrono::NaiveDate;
use std::sync::Arc;

pub type HabitHandler = HabitCommandHandler<InMemoryEventStore<HabitEvent>, InMemoryDomainOutbox>;
pub type HabitProjector = Projector<InMemoryProjections, InMemoryProjections>;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn HabitQueries + Send + Sync>,
    pub command_handler: Arc<HabitHandler>,
    pub projector: Arc<HabitProjector>,
    pub clock: Arc<dyn Clock>,
    pub calendar: TrackingCalendar,
}

impl AppState {
    pub fn in_memory(topic: &str, calendar: TrackingCalendar, clock: Arc<dyn Clock>) -> Self {
        Self::with_event_store(topic, InMemoryEventStore::new(), calendar, clock)
    }

    pub fn with_event_store(
        topic: &str,
        event_store: InMemoryEventStore<HabitEvent>,
        calendar: TrackingCalendar,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let projections = Arc::new(InMemoryProjections::new());
        let projector = Arc::new(Projector::new(
            "habits-by-user",
            projections.clone(),
            projections.clone(),
        ));
        let command_handler = Arc::new(HabitCommandHandler::new(
            topic,
            Arc::new(event_store),
            Arc::new(InMemoryDomainOutbox::new()),
        ));
        Self {
            queries: projections,
            command_handler,
            projector,
            clock,
            calendar,
        }
    }

    /// The current calendar day in the tracking offset.
    pub fn today(&self) -> NaiveDate {
        self.calendar.today(self.clock.as_ref())
    }

    pub fn now_millis(&self) -> i64 {
        self.clock.now().timestamp_millis()
    }

    /// Projects freshly committed events inline so queries observe them immediately.
    pub async fn project(&self, committed: &Committed) -> anyhow::Result<()> {
        self.projector
            .apply_committed(
                &committed.stream_id,
                committed.starting_version,
                &committed.events,
            )
            .await
    }
}
