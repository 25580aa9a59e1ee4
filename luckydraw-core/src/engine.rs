use crate::observer::DrawObserver;
use crate::tier::{pool_size, validate_tiers};
use crate::{DrawError, DrawTicket, PrizePool, PrizeTier, Result, Winner};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;

/// Where the session stands between operator commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawPhase {
    /// Envelopes left and nothing in flight.
    Ready,
    /// Every envelope has been drawn.
    Exhausted,
    /// A draw has started and its winner is not revealed yet.
    Drawing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierStatus {
    pub amount: u64,
    pub initial_count: u32,
    pub remaining: usize,
}

/// Point-in-time view for status displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    pub phase: DrawPhase,
    pub remaining: usize,
    pub total: usize,
    pub remaining_value: u64,
    pub tiers: Vec<TierStatus>,
    pub winners: usize,
}

pub struct PrizePoolEngine<R = StdRng> {
    tiers: Vec<PrizeTier>,
    pool: PrizePool,
    history: VecDeque<Winner>,
    current_winner: Option<Winner>,
    in_flight: Option<DrawTicket>,
    epoch: u64,
    rng: R,
    observers: Vec<Arc<dyn DrawObserver>>,
}

impl PrizePoolEngine<StdRng> {
    /// Engine seeded from OS entropy.
    pub fn from_entropy(tiers: Vec<PrizeTier>) -> Result<Self> {
        Self::new(tiers, StdRng::from_entropy())
    }
}

impl<R: Rng> PrizePoolEngine<R> {
    pub fn new(tiers: Vec<PrizeTier>, rng: R) -> Result<Self> {
        let mut engine = Self {
            tiers: Vec::new(),
            pool: PrizePool::default(),
            history: VecDeque::new(),
            current_winner: None,
            in_flight: None,
            epoch: 0,
            rng,
            observers: Vec::new(),
        };
        engine.initialize(tiers)?;
        Ok(engine)
    }

    pub fn add_observer(&mut self, observer: Arc<dyn DrawObserver>) {
        self.observers.push(observer);
    }

    /// Replaces the whole session: fresh shuffled pool, empty history, no
    /// draw in flight. Invalid tiers leave everything untouched.
    pub fn initialize(&mut self, tiers: Vec<PrizeTier>) -> Result<()> {
        if let Err(e) = validate_tiers(&tiers) {
            tracing::warn!("Rejected tier configuration: {}", e);
            return Err(e);
        }

        self.pool = PrizePool::build(&tiers, &mut self.rng);
        self.tiers = tiers;
        self.history.clear();
        self.current_winner = None;
        if let Some(ticket) = self.in_flight.take() {
            tracing::warn!("Discarding in-flight draw for '{}'", ticket.name);
        }
        self.epoch += 1;

        tracing::info!(
            "Prize pool initialized with {} envelopes across {} tiers (epoch {})",
            self.pool.len(),
            self.tiers.len(),
            self.epoch
        );
        Ok(())
    }

    /// Rebuilds from the last configured tiers.
    pub fn reset(&mut self) -> Result<()> {
        let tiers = self.tiers.clone();
        self.initialize(tiers)?;
        self.notify_reset();
        Ok(())
    }

    pub fn update_tiers(&mut self, tiers: Vec<PrizeTier>) -> Result<()> {
        self.initialize(tiers)?;
        self.notify_reset();
        Ok(())
    }

    /// First half of a draw. Marks the session as drawing; the winner is only
    /// picked when the returned ticket is redeemed with `complete_draw`.
    pub fn begin_draw(&mut self, name: impl Into<String>) -> Result<DrawTicket> {
        let name = name.into();

        if let Some(current) = &self.in_flight {
            tracing::warn!(
                "Ignoring draw for '{}': draw for '{}' still in progress",
                name,
                current.name
            );
            return Err(DrawError::AlreadyDrawing);
        }

        if self.pool.is_empty() {
            tracing::warn!("Draw for '{}' refused: pool exhausted", name);
            for observer in &self.observers {
                observer.on_pool_exhausted();
            }
            return Err(DrawError::PoolExhausted);
        }

        let ticket = DrawTicket {
            epoch: self.epoch,
            name,
            started_at: Utc::now(),
        };
        self.in_flight = Some(ticket.clone());

        tracing::info!(
            "Drawing for '{}' ({} envelopes left)",
            ticket.name,
            self.pool.len()
        );
        for observer in &self.observers {
            observer.on_draw_started(&ticket.name);
        }

        Ok(ticket)
    }

    /// Second half of a draw: removes one random envelope and records the
    /// winner. Tickets issued before the last reset are refused.
    pub fn complete_draw(&mut self, ticket: DrawTicket) -> Result<Winner> {
        if ticket.epoch != self.epoch || self.in_flight.as_ref() != Some(&ticket) {
            tracing::warn!("Draw for '{}' was superseded by a reset", ticket.name);
            return Err(DrawError::DrawSuperseded);
        }
        self.in_flight = None;

        let amount = match self.pool.take_random(&mut self.rng) {
            Some(amount) => amount,
            None => return Err(DrawError::PoolExhausted),
        };

        let winner = Winner::new(ticket.name, amount);
        self.history.push_front(winner.clone());
        self.current_winner = Some(winner.clone());

        tracing::info!(
            "Winner {} drew {} ({} envelopes left)",
            winner.name,
            winner.amount,
            self.pool.len()
        );
        for observer in &self.observers {
            observer.on_winner_revealed(&winner);
        }

        Ok(winner)
    }

    /// Both halves of a draw back to back, with no reveal pause.
    pub fn draw_now(&mut self, name: impl Into<String>) -> Result<Winner> {
        let ticket = self.begin_draw(name)?;
        self.complete_draw(ticket)
    }

    fn notify_reset(&self) {
        let snapshot = self.snapshot();
        for observer in &self.observers {
            observer.on_reset(&snapshot);
        }
    }
}

impl<R> PrizePoolEngine<R> {
    pub fn tiers(&self) -> &[PrizeTier] {
        &self.tiers
    }

    pub fn pool(&self) -> &[u64] {
        self.pool.as_slice()
    }

    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    /// Winners, most recent first.
    pub fn history(&self) -> impl Iterator<Item = &Winner> + '_ {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn current_winner(&self) -> Option<&Winner> {
        self.current_winner.as_ref()
    }

    /// Clears the displayed winner without touching history.
    pub fn dismiss_winner(&mut self) -> Option<Winner> {
        self.current_winner.take()
    }

    pub fn is_drawing(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn phase(&self) -> DrawPhase {
        if self.in_flight.is_some() {
            DrawPhase::Drawing
        } else if self.pool.is_empty() {
            DrawPhase::Exhausted
        } else {
            DrawPhase::Ready
        }
    }

    pub fn total_awarded(&self) -> u64 {
        self.history
            .iter()
            .fold(0u64, |acc, w| acc.saturating_add(w.amount))
    }

    pub fn snapshot(&self) -> PoolSnapshot {
        // Tiers sharing an amount share the remaining envelopes, first tier first.
        let mut left = self.pool.counts();
        let tiers = self
            .tiers
            .iter()
            .map(|tier| {
                let available = left.entry(tier.amount).or_insert(0);
                let remaining = (*available).min(tier.initial_count as usize);
                *available -= remaining;
                TierStatus {
                    amount: tier.amount,
                    initial_count: tier.initial_count,
                    remaining,
                }
            })
            .collect();

        PoolSnapshot {
            phase: self.phase(),
            remaining: self.pool.len(),
            total: pool_size(&self.tiers),
            remaining_value: self.pool.total_value(),
            tiers,
            winners: self.history.len(),
        }
    }
}

impl<R> std::fmt::Debug for PrizePoolEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrizePoolEngine")
            .field("tiers", &self.tiers)
            .field("remaining", &self.pool.len())
            .field("winners", &self.history.len())
            .field("drawing", &self.in_flight.is_some())
            .field("epoch", &self.epoch)
            .field("observers", &self.observers.len())
            .finish()
    }
}
