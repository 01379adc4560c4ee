use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid height parameter: {height}. Must be a positive integer or 'original'")]
    InvalidHeight { height: String },

    #[error("Height must be greater than 0, got: {height}")]
    ZeroHeight { height: usize },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
