use crate::modules::habits::core::events::HabitEvent;
use crate::modules::habits::use_cases::handler::{
    ApplicationError, Committed, HabitCommandHandler, stream_id,
};
use crate::modules::habits::use_cases::revoke_completion::command::RevokeCompletion;
use crate::modules::habits::use_cases::revoke_completion::decide::decide_revoke_completion;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;

impl<TEventStore, TOutbox> HabitCommandHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<HabitEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub async fn revoke_completion(
        &self,
        command: RevokeCompletion,
    ) -> Result<Committed, ApplicationError> {
        let stream_id = stream_id(&command.habit_id);
        self.execute(&stream_id, |state| decide_revoke_completion(state, command))
            .await
    }
}
