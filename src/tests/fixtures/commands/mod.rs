pub mod create_habit;
pub mod record_completion;
