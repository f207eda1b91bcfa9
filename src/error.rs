//! Error types shared across the crate.

use thiserror::Error;

use crate::language::{Language, WordTier};

/// Errors raised while loading the bundled word lists.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WordBankError {
    #[error("word list `{0}` is not bundled")]
    MissingFile(String),
    #[error("word list `{0}` is not valid utf-8")]
    NotUtf8(String),
    #[error("word list `{file}` is malformed: {source}")]
    Malformed {
        file: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{language} has no {tier} words")]
    EmptyTier { language: Language, tier: WordTier },
}

/// Errors raised by the config store.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
