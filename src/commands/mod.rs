pub mod categories;
pub mod count;
pub mod generate;
pub mod stats;

use random_word_slugs::config::read_config;
use random_word_slugs::{CaseStyle, PartOfSpeech, Result, SlugOptions};

use crate::cli::SlugArgs;

/// Merge the optional config file with command-line flags.
/// Flags replace file values field by field.
pub fn slug_options(args: &SlugArgs) -> Result<(Option<i64>, SlugOptions)> {
    let file = match &args.config {
        Some(path) => read_config(path)?,
        None => Default::default(),
    };

    let mut flags = SlugOptions::new();
    if !args.parts_of_speech.is_empty() {
        let parts = args
            .parts_of_speech
            .iter()
            .map(|p| p.parse::<PartOfSpeech>())
            .collect::<Result<Vec<_>>>()?;
        flags = flags.parts_of_speech(parts);
    }
    if !args.adjective_categories.is_empty() {
        flags = flags.categories(PartOfSpeech::Adjective, args.adjective_categories.iter().cloned());
    }
    if !args.noun_categories.is_empty() {
        flags = flags.categories(PartOfSpeech::Noun, args.noun_categories.iter().cloned());
    }
    if let Some(case) = &args.case {
        flags = flags.case(CaseStyle::from_name(case));
    }

    Ok((args.count.or(file.word_count), file.options.overlay(flags)))
}
