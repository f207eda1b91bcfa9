use include_dir::{include_dir, Dir};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use serde_json::from_str;
use std::collections::HashMap;

use super::{Language, WordTier};
use crate::error::WordBankError;

static LANG_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/lang");

/// Words of one language, bucketed by length
#[derive(Deserialize, Clone, Debug)]
pub struct WordList {
    pub name: String,
    pub short: Vec<String>,
    pub medium: Vec<String>,
    pub long: Vec<String>,
}

impl WordList {
    pub fn tier(&self, tier: WordTier) -> &[String] {
        match tier {
            WordTier::Short => &self.short,
            WordTier::Medium => &self.medium,
            WordTier::Long => &self.long,
        }
    }
}

/// Every bundled word list, loaded once at startup and never mutated
#[derive(Clone, Debug)]
pub struct WordBank {
    lists: HashMap<Language, WordList>,
}

impl WordBank {
    pub fn load() -> Result<Self, WordBankError> {
        let mut lists = HashMap::new();
        for language in Language::ALL {
            let list = read_word_list(language)?;
            for tier in [WordTier::Short, WordTier::Medium, WordTier::Long] {
                if list.tier(tier).is_empty() {
                    return Err(WordBankError::EmptyTier { language, tier });
                }
            }
            lists.insert(language, list);
        }
        Ok(Self { lists })
    }

    pub fn words(&self, language: Language, tier: WordTier) -> &[String] {
        self.lists
            .get(&language)
            .map(|list| list.tier(tier))
            .unwrap_or(&[])
    }

    /// Uniform random draw from the (language, tier) list
    pub fn pick<R: Rng + ?Sized>(
        &self,
        language: Language,
        tier: WordTier,
        rng: &mut R,
    ) -> Option<&str> {
        self.words(language, tier).choose(rng).map(String::as_str)
    }
}

fn read_word_list(language: Language) -> Result<WordList, WordBankError> {
    let file_name = format!("{}.json", language.file_stem());
    let file = LANG_DIR
        .get_file(&file_name)
        .ok_or_else(|| WordBankError::MissingFile(file_name.clone()))?;

    let file_as_str = file
        .contents_utf8()
        .ok_or_else(|| WordBankError::NotUtf8(file_name.clone()))?;

    from_str(file_as_str).map_err(|source| WordBankError::Malformed {
        file: file_name,
        source,
    })
}
