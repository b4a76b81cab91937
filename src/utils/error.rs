use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Form file error: {0}")]
    FormFileError(#[from] toml::de::Error),

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, FormError>;
