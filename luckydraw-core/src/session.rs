use crate::observer::DrawObserver;
use crate::{EngineConfig, PoolSnapshot, PrizePoolEngine, PrizeTier, Result, Winner};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

/// Shared handle to one draw session. Clones refer to the same engine.
pub struct DrawSession<R = StdRng> {
    engine: Arc<Mutex<PrizePoolEngine<R>>>,
    reveal_delay: Duration,
}

impl<R> Clone for DrawSession<R> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            reveal_delay: self.reveal_delay,
        }
    }
}

impl DrawSession<StdRng> {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let engine = PrizePoolEngine::from_entropy(config.tiers)?;
        Ok(Self::with_engine(engine, config.reveal_delay))
    }
}

impl<R: Rng> DrawSession<R> {
    pub fn with_engine(engine: PrizePoolEngine<R>, reveal_delay: Duration) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            reveal_delay,
        }
    }

    pub fn reveal_delay(&self) -> Duration {
        self.reveal_delay
    }

    /// Starts a draw, waits out the reveal delay, then picks the envelope.
    /// The engine is unlocked during the wait so status queries (and resets)
    /// still go through; a reset during the wait yields `DrawSuperseded`.
    pub async fn draw(&self, name: impl Into<String>) -> Result<Winner> {
        let ticket = self.engine.lock().begin_draw(name)?;

        if !self.reveal_delay.is_zero() {
            tokio::time::sleep(self.reveal_delay).await;
        }

        self.engine.lock().complete_draw(ticket)
    }

    pub fn reset(&self) -> Result<()> {
        self.engine.lock().reset()
    }

    pub fn update_tiers(&self, tiers: Vec<PrizeTier>) -> Result<()> {
        self.engine.lock().update_tiers(tiers)
    }

    pub fn add_observer(&self, observer: Arc<dyn DrawObserver>) {
        self.engine.lock().add_observer(observer);
    }

    pub fn snapshot(&self) -> PoolSnapshot {
        self.engine.lock().snapshot()
    }

    pub fn tiers(&self) -> Vec<PrizeTier> {
        self.engine.lock().tiers().to_vec()
    }

    pub fn pool(&self) -> Vec<u64> {
        self.engine.lock().pool().to_vec()
    }

    /// Winners, most recent first.
    pub fn history(&self) -> Vec<Winner> {
        self.engine.lock().history().cloned().collect()
    }

    pub fn current_winner(&self) -> Option<Winner> {
        self.engine.lock().current_winner().cloned()
    }

    pub fn dismiss_winner(&self) -> Option<Winner> {
        self.engine.lock().dismiss_winner()
    }

    pub fn is_drawing(&self) -> bool {
        self.engine.lock().is_drawing()
    }

    pub fn total_awarded(&self) -> u64 {
        self.engine.lock().total_awarded()
    }
}
