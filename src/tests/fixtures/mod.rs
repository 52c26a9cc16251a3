use chrono::NaiveDate;

pub mod commands;
pub mod events;
pub mod rows;
pub mod state;

/// The reference "today" used across tests: a Friday in a leap year.
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}
