use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Profile parse error: {0}")]
    ProfileError(#[from] toml::de::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid content for '{field}' ({value}): {reason}")]
    InvalidContentError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Message delivery failed: {message}")]
    DeliveryError { message: String },
}

pub type Result<T> = std::result::Result<T, SiteError>;
