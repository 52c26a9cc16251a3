use crate::modules::habits::core::events::HabitEvent;
use crate::modules::habits::use_cases::handler::{
    ApplicationError, Committed, HabitCommandHandler, stream_id,
};
use crate::modules::habits::use_cases::update_habit::command::UpdateHabit;
use crate::modules::habits::use_cases::update_habit::decide::decide_update;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;

impl<TEventStore, TOutbox> HabitCommandHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<HabitEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub async fn update_habit(&self, command: UpdateHabit) -> Result<Committed, ApplicationError> {
        let stream_id = stream_id(&command.habit_id);
        self.execute(&stream_id, |state| decide_update(state, command))
            .await
    }
}
