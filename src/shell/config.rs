use std::{env, fmt::Display, net::SocketAddr, str::FromStr};

use anyhow::Context;
use tracing::{info, warn};

use crate::shared::core::calendar::TrackingCalendar;

pub const ADDR_KEY: &str = "HABITS_ADDR";
pub const OUTBOX_TOPIC_KEY: &str = "HABITS_OUTBOX_TOPIC";
pub const UTC_OFFSET_KEY: &str = "HABITS_UTC_OFFSET_MINUTES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub outbox_topic: String,
    pub calendar: TrackingCalendar,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, falling back to defaults
    /// for unset keys. Set but unparsable values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let offset_minutes: i32 = try_load(&lookup, UTC_OFFSET_KEY, "0")?;
        let calendar = TrackingCalendar::from_offset_minutes(offset_minutes)
            .with_context(|| format!("Invalid {UTC_OFFSET_KEY} value"))?;

        let outbox_topic: String = try_load(&lookup, OUTBOX_TOPIC_KEY, "habits.v1")?;
        if outbox_topic.trim().is_empty() {
            anyhow::bail!("{OUTBOX_TOPIC_KEY} must not be blank");
        }

        Ok(Self {
            addr: try_load(&lookup, ADDR_KEY, "0.0.0.0:8080")?,
            outbox_topic,
            calendar,
        })
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> anyhow::Result<T>
where
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    raw.parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        anyhow::anyhow!("Invalid {key} value {raw:?}: {e}")
    })
}
