use chrono::NaiveDate;

use crate::modules::habits::core::events::HabitEvent;
use crate::modules::habits::core::intents::HabitIntent;
use crate::modules::habits::core::state::{ActiveHabit, HabitState};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("habit already exists")]
    AlreadyExists,

    #[error("habit not found")]
    NotFound,

    #[error("habit belongs to another user")]
    NotOwner,

    #[error("habit name must not be blank")]
    InvalidName,

    #[error("nothing to update")]
    NothingToUpdate,

    #[error("habit already completed on {day}")]
    DuplicateCompletion { day: NaiveDate },

    #[error("habit was not completed on {day}")]
    NoOpRevoke { day: NaiveDate },

    #[error("cannot record a completion for {day} after {today}")]
    FutureDay { day: NaiveDate, today: NaiveDate },
}

pub enum Decision {
    Accepted {
        events: Vec<HabitEvent>,
        intents: Vec<HabitIntent>,
    },
    Rejected {
        reason: DecideError,
    },
}

impl Decision {
    pub fn rejected(reason: DecideError) -> Self {
        Decision::Rejected { reason }
    }
}

/// Resolves the habit a command targets, enforcing existence and ownership.
pub fn owned_habit<'a>(state: &'a HabitState, user_id: &str) -> Result<&'a ActiveHabit, DecideError> {
    match state {
        HabitState::Active(habit) if habit.user_id == user_id => Ok(habit),
        HabitState::Active(_) => Err(DecideError::NotOwner),
        HabitState::None | HabitState::Deleted { .. } => Err(DecideError::NotFound),
    }
}

/// Trims a proposed habit name, rejecting blank ones.
pub fn normalize_name(name: &str) -> Result<String, DecideError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DecideError::InvalidName);
    }
    Ok(trimmed.to_string())
}
