/// The Result type for the engine.
pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid grid state: {reason}")]
    InvalidGridState { reason: String },
}

impl EngineError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidGridState {
            reason: reason.into(),
        }
    }
}
