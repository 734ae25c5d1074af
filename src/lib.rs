//! Human-readable random word slugs such as `quick-brown-fox`.
//!
//! Words come from a built-in list tagged by part of speech and category.
//! [`generate`] draws a slug; [`count_combinations`] reports how many distinct
//! slugs the same configuration can produce.

pub mod case;
pub mod combinations;
pub mod config;
pub mod error;
pub mod format;
pub mod generator;
pub mod words;

pub use case::{format_words, CaseStyle};
pub use combinations::count_combinations;
pub use config::{SlugFile, SlugOptions};
pub use error::{Result, SlugError};
pub use generator::{generate, SlugGenerator};
pub use words::{PartOfSpeech, WordDataset, WordEntry};
