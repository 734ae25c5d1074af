use std::io;

use crate::words::PartOfSpeech;

#[derive(Debug, thiserror::Error)]
pub enum SlugError {
    #[error("Invalid word count: {0} (must be a positive integer)")]
    InvalidWordCount(i64),

    #[error("Unknown part of speech: {0}")]
    UnknownPartOfSpeech(String),

    #[error("No candidate words for position {position} ({part_of_speech})")]
    NoCandidatesAvailable {
        position: usize,
        part_of_speech: PartOfSpeech,
    },

    #[error("Expected {expected} parts of speech, got {actual}")]
    PartsOfSpeechLength { expected: usize, actual: usize },

    #[error("Number of combinations does not fit in 128 bits")]
    CombinationOverflow,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SlugError>;
