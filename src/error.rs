use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckInError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Invalid Answer: {0}")]
    InvalidAnswer(String),

    #[error("Invalid Transition: {0}")]
    InvalidTransition(String),

    #[error("Feedback Store Error: {0}")]
    Store(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type CiResult<T> = Result<T, CheckInError>;
