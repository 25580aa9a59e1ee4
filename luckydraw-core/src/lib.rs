//! Lucky draw prize pool engine
//!
//! Keeps a shuffled pool of red-envelope amounts built from prize tiers,
//! draws one envelope per guest, and records who won what.
//! A draw is split into `begin_draw` / `complete_draw` so the reveal can be
//! paced; `DrawSession::draw` does both with the configured pause in between.

pub mod config;
pub mod engine;
pub mod error;
pub mod observer;
pub mod pool;
pub mod session;
pub mod tier;
pub mod winner;

pub use config::EngineConfig;
pub use engine::{DrawPhase, PoolSnapshot, PrizePoolEngine, TierStatus};
pub use error::{DrawError, Result};
pub use observer::DrawObserver;
pub use pool::PrizePool;
pub use session::DrawSession;
pub use tier::{default_tiers, load_tiers_file, PrizeTier};
pub use winner::{DrawTicket, Winner};

/// Create a session from `config`, shuffled from OS entropy
pub fn create_session(config: EngineConfig) -> Result<DrawSession> {
    DrawSession::new(config)
}
