use chrono::NaiveDate;

use crate::modules::habits::use_cases::record_completion::command::RecordCompletion;
use crate::tests::fixtures::fixed_today;

pub struct RecordCompletionBuilder {
    inner: RecordCompletion,
}

impl Default for RecordCompletionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RecordCompletionBuilder {
    pub fn new() -> Self {
        Self {
            inner: RecordCompletion {
                habit_id: "habit-fixed-0001".to_string(),
                user_id: "user-fixed-0001".to_string(),
                day: fixed_today(),
                today: fixed_today(),
                recorded_at: 1_710_500_000_000,
            },
        }
    }

    pub fn habit_id(mut self, v: impl Into<String>) -> Self {
        self.inner.habit_id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn day(mut self, v: NaiveDate) -> Self {
        self.inner.day = v;
        self
    }

    pub fn today(mut self, v: NaiveDate) -> Self {
        self.inner.today = v;
        self
    }

    pub fn build(self) -> RecordCompletion {
        self.inner
    }
}
