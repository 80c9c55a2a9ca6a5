use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use uuid::Uuid;

/// How the store mints user ids.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// Nanoseconds since the Unix epoch, strictly increasing per store.
    #[default]
    Timestamp,
    /// Random UUID v4.
    Uuid,
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "timestamp" => Ok(IdStrategy::Timestamp),
            "uuid" => Ok(IdStrategy::Uuid),
            other => Err(format!("unknown id strategy `{}` (expected `timestamp` or `uuid`)", other)),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::Timestamp => write!(f, "timestamp"),
            IdStrategy::Uuid => write!(f, "uuid"),
        }
    }
}

/// Id source owned by the store table. Must only be called with the store lock held.
#[derive(Debug)]
pub struct IdGenerator {
    strategy: IdStrategy,
    last_issued: i64,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        IdGenerator {
            strategy,
            last_issued: 0,
        }
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    pub fn next_id(&mut self) -> String {
        match self.strategy {
            IdStrategy::Timestamp => self.next_after(Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX)),
            IdStrategy::Uuid => Uuid::new_v4().to_string(),
        }
    }

    /// Timestamp id for a clock reading of `now` nanoseconds.
    fn next_after(&mut self, now: i64) -> String {
        // Coarse or stepped-back clocks repeat readings; never hand out the same tick twice.
        let next = now.max(self.last_issued.saturating_add(1));
        self.last_issued = next;
        next.to_string()
    }
}
