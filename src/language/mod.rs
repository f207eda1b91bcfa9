pub mod bank;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use bank::{WordBank, WordList};

/// One of the bundled word list languages
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    ValueEnum,
    Serialize,
    Deserialize,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
    ];

    /// Name of the bundled json file, without extension
    pub fn file_stem(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Spanish => "spanish",
            Language::French => "french",
            Language::German => "german",
        }
    }

    /// Label shown on the menu, in the language itself
    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "ENGLISH",
            Language::Spanish => "ESPAÑOL",
            Language::French => "FRANÇAIS",
            Language::German => "DEUTSCH",
        }
    }

    pub fn next(&self) -> Language {
        let idx = Self::ALL.iter().position(|l| l == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Language {
        let idx = Self::ALL.iter().position(|l| l == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Approximate length bucket of a word list. Short words never exceed 5
/// letters; medium and long overlap in some languages, long is mostly 8+.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum WordTier {
    Short,
    Medium,
    Long,
}
