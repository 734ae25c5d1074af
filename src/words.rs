use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlugError};

/// Part-of-speech tag partitioning the word dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PartOfSpeech {
    Adjective,
    Noun,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 2] = [PartOfSpeech::Adjective, PartOfSpeech::Noun];

    pub fn as_str(self) -> &'static str {
        match self {
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Noun => "noun",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartOfSpeech {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adjective" => Ok(PartOfSpeech::Adjective),
            "noun" => Ok(PartOfSpeech::Noun),
            _ => Err(SlugError::UnknownPartOfSpeech(s.to_string())),
        }
    }
}

impl TryFrom<String> for PartOfSpeech {
    type Error = SlugError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// A single word and the categories it is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordEntry {
    pub word: &'static str,
    pub categories: &'static [&'static str],
}

impl WordEntry {
    /// True when no filter is given, or when any of this word's categories is allowed.
    pub fn matches(&self, allowed: Option<&BTreeSet<String>>) -> bool {
        match allowed {
            None => true,
            Some(set) if set.is_empty() => true,
            Some(set) => self.categories.iter().any(|c| set.contains(*c)),
        }
    }
}

const fn entry(word: &'static str, categories: &'static [&'static str]) -> WordEntry {
    WordEntry { word, categories }
}

const NOUNS: &[WordEntry] = &[
    entry("mother", &["people", "family"]),
    entry("father", &["people", "family"]),
    entry("baby", &["people", "family"]),
    entry("child", &["people", "family"]),
    entry("toddler", &["people", "family"]),
    entry("teenager", &["people", "family"]),
    entry("grandmother", &["people", "family"]),
    entry("student", &["people", "education"]),
    entry("teacher", &["people", "education"]),
    entry("minister", &["people", "religion"]),
    entry("businessperson", &["people", "business"]),
    entry("salesclerk", &["people", "business"]),
    entry("woman", &["people"]),
    entry("man", &["people"]),
    entry("lion", &["animals"]),
    entry("tiger", &["animals"]),
    entry("bear", &["animals"]),
    entry("dog", &["animals"]),
    entry("cat", &["animals"]),
    entry("alligator", &["animals"]),
    entry("cricket", &["animals"]),
    entry("bird", &["animals"]),
    entry("wolf", &["animals"]),
    entry("table", &["thing"]),
    entry("truck", &["thing", "transportation"]),
    entry("book", &["thing", "education"]),
    entry("pencil", &["thing", "education"]),
    entry("computer", &["thing", "technology"]),
    entry("coat", &["thing"]),
    entry("boots", &["thing"]),
    entry("city", &["place"]),
    entry("state", &["place"]),
    entry("country", &["place"]),
    entry("continent", &["place"]),
    entry("coffeeshop", &["place"]),
    entry("restaurant", &["place"]),
    entry("park", &["place"]),
    entry("zoo", &["place"]),
];

// "attractive" appears twice upstream; lookups and counts include both.
const ADJECTIVES: &[WordEntry] = &[
    entry("green", &["colors"]),
    entry("jealous", &["emotions"]),
    entry("attractive", &["appearance"]),
    entry("bald", &["appearance"]),
    entry("beautiful", &["appearance"]),
    entry("chubby", &["appearance"]),
    entry("clean", &["appearance"]),
    entry("dazzling", &["appearance"]),
    entry("drab", &["appearance"]),
    entry("elegant", &["appearance"]),
    entry("fancy", &["appearance"]),
    entry("fit", &["appearance"]),
    entry("attractive", &["appearance"]),
];

/// Immutable mapping from part of speech to its ordered word list.
#[derive(Debug, Clone, Default)]
pub struct WordDataset {
    lists: BTreeMap<PartOfSpeech, &'static [WordEntry]>,
}

impl WordDataset {
    /// An empty dataset. Populate it with [`WordDataset::with_list`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The word list shipped with the crate.
    pub fn builtin() -> &'static WordDataset {
        static BUILTIN: OnceLock<WordDataset> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            WordDataset::new()
                .with_list(PartOfSpeech::Noun, NOUNS)
                .with_list(PartOfSpeech::Adjective, ADJECTIVES)
        })
    }

    pub fn with_list(mut self, part_of_speech: PartOfSpeech, words: &'static [WordEntry]) -> Self {
        self.lists.insert(part_of_speech, words);
        self
    }

    pub fn entries(&self, part_of_speech: PartOfSpeech) -> Result<&'static [WordEntry]> {
        self.lists
            .get(&part_of_speech)
            .copied()
            .ok_or_else(|| SlugError::UnknownPartOfSpeech(part_of_speech.to_string()))
    }

    /// Words for `part_of_speech` whose categories intersect `allowed`, in dataset order.
    /// A missing or empty filter returns the whole list.
    pub fn lookup(
        &self,
        part_of_speech: PartOfSpeech,
        allowed: Option<&BTreeSet<String>>,
    ) -> Result<Vec<&'static str>> {
        let words: Vec<&'static str> = self
            .entries(part_of_speech)?
            .iter()
            .filter(|e| e.matches(allowed))
            .map(|e| e.word)
            .collect();
        tracing::trace!(%part_of_speech, matched = words.len(), "word lookup");
        Ok(words)
    }

    /// Same result as `lookup(..).len()` without collecting the words.
    pub fn count(
        &self,
        part_of_speech: PartOfSpeech,
        allowed: Option<&BTreeSet<String>>,
    ) -> Result<usize> {
        Ok(self
            .entries(part_of_speech)?
            .iter()
            .filter(|e| e.matches(allowed))
            .count())
    }

    /// Unique categories used by `part_of_speech`, sorted.
    pub fn categories(&self, part_of_speech: PartOfSpeech) -> Result<Vec<&'static str>> {
        let unique: BTreeSet<&'static str> = self
            .entries(part_of_speech)?
            .iter()
            .flat_map(|e| e.categories.iter().copied())
            .collect();
        Ok(unique.into_iter().collect())
    }
}

/// Look up words in the built-in dataset.
pub fn lookup(
    part_of_speech: PartOfSpeech,
    allowed: Option<&BTreeSet<String>>,
) -> Result<Vec<&'static str>> {
    WordDataset::builtin().lookup(part_of_speech, allowed)
}

/// Unique sorted categories in the built-in dataset.
pub fn categories(part_of_speech: PartOfSpeech) -> Result<Vec<&'static str>> {
    WordDataset::builtin().categories(part_of_speech)
}
