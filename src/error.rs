/// Application-level errors
///
/// Only `Fetch`, `Configuration` and the artifact errors (`Io`, `Serialization`)
/// stop a run. Missing fields in catalog data never surface here; they are
/// resolved to `None` or placeholder text further down the pipeline.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
