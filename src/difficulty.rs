use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::language::WordTier;

/// Time limit and score multiplier of a difficulty level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultySettings {
    pub time_limit_secs: u32,
    pub word_multiplier: f64,
}

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
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn settings(&self) -> DifficultySettings {
        match self {
            Difficulty::Easy => DifficultySettings {
                time_limit_secs: 60,
                word_multiplier: 1.0,
            },
            Difficulty::Medium => DifficultySettings {
                time_limit_secs: 45,
                word_multiplier: 1.5,
            },
            Difficulty::Hard => DifficultySettings {
                time_limit_secs: 30,
                word_multiplier: 2.0,
            },
        }
    }

    /// Harder games draw longer words
    pub fn word_tier(&self) -> WordTier {
        match self {
            Difficulty::Easy => WordTier::Short,
            Difficulty::Medium => WordTier::Medium,
            Difficulty::Hard => WordTier::Long,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }

    pub fn next(&self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn prev(&self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Medium => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Medium,
        }
    }
}
