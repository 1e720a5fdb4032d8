#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Capability error: {0}")]
    Capability(String),
    #[error("Content error: {0}")]
    Content(String),
    #[error("Shell error: {0}")]
    Shell(String),
    #[error("Invalid content source: {0}")]
    InvalidSource(#[from] url::ParseError),
    #[error("Tauri error: {0}")]
    Tauri(#[from] tauri::Error),
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
