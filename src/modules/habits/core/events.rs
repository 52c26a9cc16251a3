pub mod v1 {
    pub mod habit_completion_recorded;
    pub mod habit_completion_revoked;
    pub mod habit_created;
    pub mod habit_deleted;
    pub mod habit_updated;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum HabitEvent {
    HabitCreatedV1(v1::habit_created::HabitCreatedV1),
    HabitUpdatedV1(v1::habit_updated::HabitUpdatedV1),
    HabitDeletedV1(v1::habit_deleted::HabitDeletedV1),
    HabitCompletionRecordedV1(v1::habit_completion_recorded::HabitCompletionRecordedV1),
    HabitCompletionRevokedV1(v1::habit_completion_revoked::HabitCompletionRevokedV1),
}

impl HabitEvent {
    pub fn habit_id(&self) -> &str {
        match self {
            HabitEvent::HabitCreatedV1(e) => &e.habit_id,
            HabitEvent::HabitUpdatedV1(e) => &e.habit_id,
            HabitEvent::HabitDeletedV1(e) => &e.habit_id,
            HabitEvent::HabitCompletionRecordedV1(e) => &e.habit_id,
            HabitEvent::HabitCompletionRevokedV1(e) => &e.habit_id,
        }
    }
}
