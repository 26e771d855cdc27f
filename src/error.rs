/// The Result type for slide48.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{source}")]
    TuiError {
        #[from]
        source: crate::tui::error::TuiError,
    },

    #[error("{source}")]
    EngineError {
        #[from]
        source: crate::engine::EngineError,
    },
}
