use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A completed draw. Never changes after it is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    pub id: Uuid,
    pub name: String,
    pub amount: u64,
    pub timestamp: DateTime<Utc>,
}

impl Winner {
    pub fn new(name: impl Into<String>, amount: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            timestamp: Utc::now(),
        }
    }
}

/// Handed out by `begin_draw` and redeemed by `complete_draw`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawTicket {
    pub(crate) epoch: u64,
    pub(crate) name: String,
    pub(crate) started_at: DateTime<Utc>,
}

impl DrawTicket {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}
