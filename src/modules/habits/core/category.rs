use std::fmt;
use std::str::FromStr;

/// When in the day a habit is meant to happen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitCategory {
    Morning,
    Night,
    #[default]
    Any,
}

impl HabitCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            HabitCategory::Morning => "morning",
            HabitCategory::Night => "night",
            HabitCategory::Any => "any",
        }
    }
}

impl fmt::Display for HabitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown habit category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for HabitCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(HabitCategory::Morning),
            "night" => Ok(HabitCategory::Night),
            "any" => Ok(HabitCategory::Any),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}
