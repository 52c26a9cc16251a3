use crate::modules::habits::core::events::HabitEvent;
use crate::modules::habits::use_cases::create_habit::command::CreateHabit;
use crate::modules::habits::use_cases::create_habit::decide::decide_create;
use crate::modules::habits::use_cases::handler::{
    ApplicationError, Committed, HabitCommandHandler, stream_id,
};
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;

impl<TEventStore, TOutbox> HabitCommandHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<HabitEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub async fn create_habit(&self, command: CreateHabit) -> Result<Committed, ApplicationError> {
        let stream_id = stream_id(&command.habit_id);
        self.execute(&stream_id, |state| decide_create(state, command))
            .await
    }
}
