use crate::{PoolSnapshot, Winner};

/// Feedback hooks (sound, animation, logging). Called synchronously while
/// the engine is mid-operation, so implementations must not block.
pub trait DrawObserver: Send + Sync {
    fn on_draw_started(&self, _name: &str) {}

    fn on_winner_revealed(&self, _winner: &Winner) {}

    fn on_pool_exhausted(&self) {}

    fn on_reset(&self, _snapshot: &PoolSnapshot) {}
}
