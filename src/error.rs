use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RsyncBackupError {
    #[error("{0}")]
    Message(String),
    #[error("{0}")]
    Config(ConfigError),
    #[error("{0}")]
    Persist(PersistError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {0}")]
    Read(String),
    #[error("parse config: {0}")]
    Parse(String),
    #[error("{0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("encode state: {0}")]
    Encode(String),
    #[error("write state {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Failures local to one section; the runner downgrades these to an outcome.
#[derive(Debug, Error)]
pub enum SectionError {
    #[error("dest path not present {}", .0.display())]
    DestinationUnavailable(PathBuf),
    #[error("mkdir {}: {source}", .path.display())]
    CreateDestination { path: PathBuf, source: io::Error },
    #[error("{0}")]
    Tool(String),
    #[error("interrupted")]
    Interrupted,
}

pub type Result<T> = std::result::Result<T, RsyncBackupError>;

impl RsyncBackupError {
    pub fn message(msg: impl Into<String>) -> Self {
        RsyncBackupError::Message(msg.into())
    }
}

impl From<ConfigError> for RsyncBackupError {
    fn from(err: ConfigError) -> Self {
        RsyncBackupError::Config(err)
    }
}

impl From<PersistError> for RsyncBackupError {
    fn from(err: PersistError) -> Self {
        RsyncBackupError::Persist(err)
    }
}
