use thiserror::Error;

pub type Result<T> = std::result::Result<T, DrawError>;

#[derive(Error, Debug)]
pub enum DrawError {
    #[error("Invalid prize tier configuration: {0}")]
    InvalidTierConfig(String),

    #[error("Prize pool exhausted: every envelope has been drawn")]
    PoolExhausted,

    #[error("A draw is already in progress")]
    AlreadyDrawing,

    #[error("Draw was superseded by a pool reset")]
    DrawSuperseded,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DrawError {
    pub fn invalid_tier(msg: impl Into<String>) -> Self {
        Self::InvalidTierConfig(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for conditions the operator just needs to be told about.
    pub fn is_notice(&self) -> bool {
        matches!(self, Self::PoolExhausted | Self::AlreadyDrawing)
    }
}
