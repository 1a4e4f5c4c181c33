use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported catalog format: {0}")]
    UnsupportedFormat(u8),

    #[error("duplicate key in catalog: '{0}'")]
    DuplicateKey(String),

    #[error("ThemeError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for ThemeError {
    fn from(error: std::io::Error) -> Self {
        ThemeError::Io(Box::new(error))
    }
}
