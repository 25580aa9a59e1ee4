use crate::{DrawError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// One prize denomination and how many envelopes of it go into the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTier")]
pub struct PrizeTier {
    pub amount: u64,
    pub initial_count: u32,
}

// Signed on purpose so a negative count in a config file is reported as a
// tier error instead of a generic parse failure.
#[derive(Deserialize)]
struct RawTier {
    amount: i64,
    initial_count: i64,
}

impl TryFrom<RawTier> for PrizeTier {
    type Error = DrawError;

    fn try_from(raw: RawTier) -> Result<Self> {
        Self::from_signed(raw.amount, raw.initial_count)
    }
}

impl PrizeTier {
    pub fn new(amount: u64, initial_count: u32) -> Result<Self> {
        let tier = Self {
            amount,
            initial_count,
        };
        tier.validate()?;
        Ok(tier)
    }

    pub fn from_signed(amount: i64, initial_count: i64) -> Result<Self> {
        if amount <= 0 {
            return Err(DrawError::invalid_tier(format!(
                "amount must be positive, got {}",
                amount
            )));
        }
        if initial_count < 0 {
            return Err(DrawError::invalid_tier(format!(
                "count for amount {} cannot be negative, got {}",
                amount, initial_count
            )));
        }
        let initial_count = u32::try_from(initial_count).map_err(|_| {
            DrawError::invalid_tier(format!(
                "count for amount {} is too large: {}",
                amount, initial_count
            ))
        })?;

        Self::new(amount as u64, initial_count)
    }

    pub fn validate(&self) -> Result<()> {
        if self.amount == 0 {
            return Err(DrawError::invalid_tier("amount must be positive, got 0"));
        }
        Ok(())
    }

    /// Sum of the amounts of every envelope this tier puts in a fresh pool.
    pub fn total_value(&self) -> u64 {
        self.amount.saturating_mul(u64::from(self.initial_count))
    }
}

impl fmt::Display for PrizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.amount, self.initial_count)
    }
}

/// Parses `AMOUNT:COUNT` (or `AMOUNTxCOUNT`).
impl FromStr for PrizeTier {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (amount, count) = s
            .split_once(':')
            .or_else(|| s.split_once(|c: char| c == 'x' || c == 'X'))
            .ok_or_else(|| {
                DrawError::invalid_tier(format!("expected AMOUNT:COUNT, got '{}'", s))
            })?;

        let amount: i64 = amount.trim().parse().map_err(|_| {
            DrawError::invalid_tier(format!("amount '{}' is not a number", amount.trim()))
        })?;
        let count: i64 = count.trim().parse().map_err(|_| {
            DrawError::invalid_tier(format!("count '{}' is not a number", count.trim()))
        })?;

        Self::from_signed(amount, count)
    }
}

/// Checks every tier; the first offending one is reported.
pub fn validate_tiers(tiers: &[PrizeTier]) -> Result<()> {
    for tier in tiers {
        tier.validate()?;
    }
    Ok(())
}

/// Number of envelopes a fresh pool built from `tiers` holds.
pub fn pool_size(tiers: &[PrizeTier]) -> usize {
    tiers.iter().map(|t| t.initial_count as usize).sum()
}

/// The envelope mix used when nothing else is configured.
pub fn default_tiers() -> Vec<PrizeTier> {
    vec![
        PrizeTier {
            amount: 2000,
            initial_count: 1,
        },
        PrizeTier {
            amount: 1000,
            initial_count: 2,
        },
        PrizeTier {
            amount: 600,
            initial_count: 5,
        },
        PrizeTier {
            amount: 200,
            initial_count: 10,
        },
        PrizeTier {
            amount: 100,
            initial_count: 20,
        },
    ]
}

/// Loads a JSON array of tiers, e.g. `[{"amount": 100, "initial_count": 2}]`.
pub fn load_tiers_file(path: &Path) -> Result<Vec<PrizeTier>> {
    let content = std::fs::read_to_string(path)?;
    let tiers: Vec<PrizeTier> = serde_json::from_str(&content).map_err(|e| {
        // try_from failures surface as serde errors; keep the tier message readable
        if e.is_data() {
            DrawError::invalid_tier(e.to_string())
        } else {
            DrawError::Serialization(e)
        }
    })?;
    validate_tiers(&tiers)?;
    Ok(tiers)
}
