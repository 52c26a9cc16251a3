use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::modules::habits::core::category::HabitCategory;
use crate::modules::habits::core::events::HabitEvent;
use crate::modules::habits::use_cases::create_habit::command::CreateHabit;
use crate::modules::habits::use_cases::record_completion::command::RecordCompletion;
use crate::shared::core::calendar::{Clock, FixedClock, TrackingCalendar};
use chrono::{DateTime, Utc};
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shell::state::AppState;
use crate::tests::fixtures::fixed_today;

const TOPIC: &str = "habits";

static SEQUENCE: AtomicI64 = AtomicI64::new(1);

/// In-memory state whose clock is pinned to noon UTC on `fixed_today()`.
pub fn make_test_state() -> AppState {
    AppState::in_memory(
        TOPIC,
        TrackingCalendar::utc(),
        Arc::new(FixedClock::at_noon(fixed_today())),
    )
}

pub fn make_offline_event_store_state() -> AppState {
    let mut event_store = InMemoryEventStore::<HabitEvent>::new();
    event_store.toggle_offline();
    AppState::with_event_store(
        TOPIC,
        event_store,
        TrackingCalendar::utc(),
        Arc::new(FixedClock::at_noon(fixed_today())),
    )
}

/// Creates and projects a habit. Creation times increase with every call so
/// ordering by `created_at` follows call order.
pub async fn seed_habit(state: &AppState, user_id: &str, name: &str) -> String {
    let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let habit_id = format!("habit-seed-{sequence:04}");
    let committed = state
        .command_handler
        .create_habit(CreateHabit {
            habit_id: habit_id.clone(),
            user_id: user_id.to_string(),
            name: name.to_string(),
            category: HabitCategory::Any,
            created_at: state.now_millis() + sequence,
        })
        .await
        .expect("seed habit failed");
    state.project(&committed).await.expect("seed projection failed");
    habit_id
}

pub async fn seed_completion(state: &AppState, user_id: &str, habit_id: &str, day: &str) {
    let committed = state
        .command_handler
        .record_completion(RecordCompletion {
            habit_id: habit_id.to_string(),
            user_id: user_id.to_string(),
            day: day.parse().expect("seed day must be YYYY-MM-DD"),
            today: state.today(),
            recorded_at: state.now_millis(),
        })
        .await
        .expect("seed completion failed");
    state.project(&committed).await.expect("seed projection failed");
}

/// A clock tests can move forward to simulate days passing.
pub struct AdjustableClock {
    millis: AtomicI64,
}

impl AdjustableClock {
    pub fn at_noon(day: chrono::NaiveDate) -> Self {
        Self {
            millis: AtomicI64::new(FixedClock::at_noon(day).now().timestamp_millis()),
        }
    }

    pub fn advance_days(&self, days: i64) {
        self.millis
            .fetch_add(days * 24 * 60 * 60 * 1000, Ordering::SeqCst);
    }
}

impl Clock for AdjustableClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.millis.load(Ordering::SeqCst)).unwrap_or_default()
    }
}
