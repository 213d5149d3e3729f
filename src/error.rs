use thiserror::Error;
use validify::ValidationErrors;

pub mod http;

#[derive(Debug, Error)]
pub enum DeskError {
    #[error("No file uploaded")]
    EmptyFile,

    #[error("Does not exist; {0}")]
    DoesNotExist(String),

    #[error("Invalid document category; {0}")]
    InvalidCategory(String),

    #[error("Invalid file name; {0}")]
    InvalidFileName(String),

    #[error("Invalid intent; {0}")]
    InvalidIntent(String),

    #[error("Invalid form; {0}")]
    InvalidForm(String),

    #[error("IO; {0}")]
    IO(#[from] std::io::Error),

    #[error("SQL; {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Validation; {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Multipart; {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
}
