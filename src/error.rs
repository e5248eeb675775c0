use thiserror::Error;

/// Errors surfaced by the record helpers and the desktop shell.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input rejected before any statement reaches the database.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid preferences file: {0}")]
    Config(#[from] serde_json::Error),

    #[error("export failed: {0}")]
    Export(#[from] csv::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }
}
