use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("No view found with name \"{0}\"")]
    ViewNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ResolverError>;
