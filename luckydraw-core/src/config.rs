use crate::error::{DrawError, Result};
use crate::tier::{default_tiers, validate_tiers};
use crate::PrizeTier;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Longest pause we accept before revealing a winner.
pub const MAX_REVEAL_DELAY: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub tiers: Vec<PrizeTier>,
    pub reveal_delay: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tiers: default_tiers(),
            reveal_delay: Duration::from_secs(2),
        }
    }
}

impl EngineConfig {
    pub fn new(tiers: Vec<PrizeTier>) -> Self {
        Self {
            tiers,
            ..Self::default()
        }
    }

    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_tiers(&self.tiers)?;

        if self.reveal_delay > MAX_REVEAL_DELAY {
            return Err(DrawError::config(format!(
                "Reveal delay must be at most {}s",
                MAX_REVEAL_DELAY.as_secs()
            )));
        }

        Ok(())
    }
}
