use crate::modules::habits::core::events::v1::{
    habit_completion_recorded::HabitCompletionRecordedV1,
    habit_completion_revoked::HabitCompletionRevokedV1, habit_created::HabitCreatedV1,
    habit_deleted::HabitDeletedV1, habit_updated::HabitUpdatedV1,
};

/// Domain intents produced by the decider as part of an Accepted decision.
/// The outbound intent_outbox adapter translates these into OutboxRows.
pub enum HabitIntent {
    PublishHabitCreated { payload: HabitCreatedV1 },
    PublishHabitUpdated { payload: HabitUpdatedV1 },
    PublishHabitDeleted { payload: HabitDeletedV1 },
    PublishHabitCompletionRecorded { payload: HabitCompletionRecordedV1 },
    PublishHabitCompletionRevoked { payload: HabitCompletionRevokedV1 },
}
