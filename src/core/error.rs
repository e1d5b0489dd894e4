use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("duplicate estimator name: {0}")]
    DuplicateEstimator(String),

    #[error(transparent)]
    Config(#[from] serde_json::Error),
}

impl BootstrapError {
    pub(crate) fn invalid_input<S: Into<String>>(msg: S) -> Self {
        BootstrapError::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, BootstrapError>;
