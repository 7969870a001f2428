use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serde json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("account error: {0}")]
    Account(#[from] keyward_core::AccountError),
    #[error("password hash error: {0}")]
    PasswordHash(String),
    #[error("no account profile found; run `keyward init` first")]
    NoProfile,
    #[error("an account profile already exists at {0}")]
    ProfileExists(String),
}

pub type Result<T> = std::result::Result<T, Error>;
