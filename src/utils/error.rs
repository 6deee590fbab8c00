use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimesaverError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Remote insights error: {message}")]
    RemoteError { message: String },

    #[error("PDF generation failed: {message}")]
    PdfError { message: String },

    #[error("Report text is not Latin-1 encodable: {text:?}")]
    UnencodableText { text: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, TimesaverError>;
