pub mod domain_event;
pub mod habit_completion_v1;
pub mod habit_created_v1;
