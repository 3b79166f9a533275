use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid search URL: {0}")]
    InvalidUrl(String),
    #[error("issue tracker error: {0}")]
    Fetch(String),
    #[error("issue tracker responded with {status}: {body}")]
    FetchStatus { status: u16, body: String },
}

pub type AppResult<T> = Result<T, AppError>;
