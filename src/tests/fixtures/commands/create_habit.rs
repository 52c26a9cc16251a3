// Shared test fixture for the CreateHabit command, seeded from a JSON document.

use crate::modules::habits::core::category::HabitCategory;
use crate::modules::habits::use_cases::create_habit::command::CreateHabit;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateHabitDto {
    pub habit_id: String,
    pub user_id: String,
    pub name: String,
    pub category: HabitCategory,
}

pub struct CreateHabitBuilder {
    inner: CreateHabit,
}

impl Default for CreateHabitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateHabitBuilder {
    pub fn new() -> Self {
        let dto: CreateHabitDto =
            serde_json::from_str(include_str!("json/create_habit.json")).unwrap();

        Self {
            inner: CreateHabit {
                habit_id: dto.habit_id,
                user_id: dto.user_id,
                name: dto.name,
                category: dto.category,
                created_at: 1_710_000_000_000,
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

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn category(mut self, v: HabitCategory) -> Self {
        self.inner.category = v;
        self
    }

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn build(self) -> CreateHabit {
        self.inner
    }
}

#[cfg(test)]
mod create_habit_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = CreateHabitBuilder::default().build();
        assert_eq!(built.habit_id, "habit-fixed-0001");
        assert_eq!(built.user_id, "user-fixed-0001");
        assert_eq!(built.name, "Drink water");
        assert_eq!(built.category, HabitCategory::Morning);
        assert_eq!(built.created_at, 1_710_000_000_000);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = CreateHabitBuilder::new()
            .habit_id("hid-123")
            .user_id("uid-456")
            .name("Stretch")
            .category(HabitCategory::Night)
            .created_at(3333)
            .build();

        assert_eq!(custom.habit_id, "hid-123");
        assert_eq!(custom.user_id, "uid-456");
        assert_eq!(custom.name, "Stretch");
        assert_eq!(custom.category, HabitCategory::Night);
        assert_eq!(custom.created_at, 3333);
    }
}
