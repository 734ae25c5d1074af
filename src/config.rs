use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;

use crate::case::CaseStyle;
use crate::error::{Result, SlugError};
use crate::words::PartOfSpeech;

pub const DEFAULT_WORD_COUNT: i64 = 3;

/// Per-call overrides. A field that is set replaces the default as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SlugOptions {
    pub parts_of_speech: Option<Vec<PartOfSpeech>>,
    pub categories: Option<BTreeMap<PartOfSpeech, BTreeSet<String>>>,
    pub case: Option<CaseStyle>,
}

impl SlugOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parts_of_speech(mut self, parts: impl IntoIterator<Item = PartOfSpeech>) -> Self {
        self.parts_of_speech = Some(parts.into_iter().collect());
        self
    }

    /// Restrict `part_of_speech` to words tagged with any of `categories`.
    pub fn categories<I, S>(mut self, part_of_speech: PartOfSpeech, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories
            .get_or_insert_with(BTreeMap::new)
            .insert(part_of_speech, categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn case(mut self, case: CaseStyle) -> Self {
        self.case = Some(case);
        self
    }

    /// Fields set in `over` win; unset fields keep the value from `self`.
    pub fn overlay(self, over: SlugOptions) -> SlugOptions {
        SlugOptions {
            parts_of_speech: over.parts_of_speech.or(self.parts_of_speech),
            categories: over.categories.or(self.categories),
            case: over.case.or(self.case),
        }
    }
}

/// Adjectives everywhere except the last position, which is a noun.
pub fn default_parts_of_speech(word_count: usize) -> Vec<PartOfSpeech> {
    let mut parts = vec![PartOfSpeech::Adjective; word_count.saturating_sub(1)];
    if word_count > 0 {
        parts.push(PartOfSpeech::Noun);
    }
    parts
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position<'a> {
    pub part_of_speech: PartOfSpeech,
    pub categories: Option<&'a BTreeSet<String>>,
}

/// Fully resolved configuration shared by generation and counting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugPlan<'a> {
    pub positions: Vec<Position<'a>>,
    pub case: CaseStyle,
}

pub fn validate_word_count(word_count: Option<i64>) -> Result<usize> {
    let n = word_count.unwrap_or(DEFAULT_WORD_COUNT);
    if n < 1 {
        return Err(SlugError::InvalidWordCount(n));
    }
    usize::try_from(n).map_err(|_| SlugError::InvalidWordCount(n))
}

fn position<'a>(part_of_speech: PartOfSpeech, options: Option<&'a SlugOptions>) -> Position<'a> {
    Position {
        part_of_speech,
        categories: options
            .and_then(|o| o.categories.as_ref())
            .and_then(|f| f.get(&part_of_speech)),
    }
}

fn explicit_parts(options: Option<&SlugOptions>, count: usize) -> Result<Option<&[PartOfSpeech]>> {
    match options.and_then(|o| o.parts_of_speech.as_deref()) {
        Some(parts) if parts.len() != count => Err(SlugError::PartsOfSpeechLength {
            expected: count,
            actual: parts.len(),
        }),
        parts => Ok(parts),
    }
}

pub fn resolve(word_count: Option<i64>, options: Option<&SlugOptions>) -> Result<SlugPlan<'_>> {
    let count = validate_word_count(word_count)?;

    let parts = match explicit_parts(options, count)? {
        Some(parts) => parts.to_vec(),
        None => default_parts_of_speech(count),
    };

    Ok(SlugPlan {
        positions: parts.into_iter().map(|p| position(p, options)).collect(),
        case: options.and_then(|o| o.case).unwrap_or_default(),
    })
}

/// A position layout and how many times it repeats in the slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionGroup<'a> {
    pub position: Position<'a>,
    pub repeat: u64,
}

/// Same resolution as [`resolve`], with positions grouped by part of speech.
/// Memory does not grow with the word count unless `parts_of_speech` is given.
pub fn resolve_groups(
    word_count: Option<i64>,
    options: Option<&SlugOptions>,
) -> Result<Vec<PositionGroup<'_>>> {
    let count = validate_word_count(word_count)?;

    let mut repeats: BTreeMap<PartOfSpeech, u64> = BTreeMap::new();
    match explicit_parts(options, count)? {
        Some(parts) => {
            for part in parts {
                *repeats.entry(*part).or_default() += 1;
            }
        }
        None => {
            if count > 1 {
                repeats.insert(PartOfSpeech::Adjective, count as u64 - 1);
            }
            repeats.insert(PartOfSpeech::Noun, 1);
        }
    }

    Ok(repeats
        .into_iter()
        .map(|(part, repeat)| PositionGroup {
            position: position(part, options),
            repeat,
        })
        .collect())
}

/// On-disk form: an optional word count plus the option fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SlugFile {
    #[serde(default)]
    pub word_count: Option<i64>,
    #[serde(flatten)]
    pub options: SlugOptions,
}

/// Read a TOML config. A missing file yields the defaults.
pub fn read_config(path: &Path) -> Result<SlugFile> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(SlugFile::default());
    }
    let content = std::fs::read_to_string(path)?;
    let file: SlugFile = toml::from_str(&content)?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_parts_of_speech_end_with_noun() {
        use PartOfSpeech::*;
        assert_eq!(default_parts_of_speech(1), vec![Noun]);
        assert_eq!(default_parts_of_speech(3), vec![Adjective, Adjective, Noun]);
        assert!(default_parts_of_speech(0).is_empty());
    }

    #[test]
    fn word_count_defaults_to_three() {
        let plan = resolve(None, None).unwrap();
        assert_eq!(plan.positions.len(), 3);
        assert_eq!(plan.case, CaseStyle::Kebab);
    }

    #[test]
    fn rejects_non_positive_word_counts() {
        assert!(matches!(resolve(Some(0), None), Err(SlugError::InvalidWordCount(0))));
        assert!(matches!(resolve(Some(-1), None), Err(SlugError::InvalidWordCount(-1))));
    }

    #[test]
    fn parts_of_speech_length_must_match() {
        let opts = SlugOptions::new().parts_of_speech([PartOfSpeech::Noun]);
        let err = resolve(Some(2), Some(&opts)).unwrap_err();
        assert!(matches!(
            err,
            SlugError::PartsOfSpeechLength { expected: 2, actual: 1 }
        ));
    }

    #[test]
    fn filters_attach_to_matching_positions() {
        let opts = SlugOptions::new().categories(PartOfSpeech::Noun, ["animals"]);
        let plan = resolve(Some(2), Some(&opts)).unwrap();
        assert_eq!(plan.positions[0].categories, None);
        let noun_filter = plan.positions[1].categories.unwrap();
        assert!(noun_filter.contains("animals"));
    }

    #[test]
    fn default_groups_do_not_grow_with_word_count() {
        let groups = resolve_groups(Some(i64::MAX), None).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].position.part_of_speech, PartOfSpeech::Adjective);
        assert_eq!(groups[0].repeat, i64::MAX as u64 - 1);
        assert_eq!(groups[1].position.part_of_speech, PartOfSpeech::Noun);
        assert_eq!(groups[1].repeat, 1);
    }

    #[test]
    fn single_word_groups_to_one_noun() {
        let groups = resolve_groups(Some(1), None).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].position.part_of_speech, PartOfSpeech::Noun);
    }

    #[test]
    fn explicit_parts_are_grouped_with_filters() {
        use PartOfSpeech::*;
        let opts = SlugOptions::new()
            .parts_of_speech([Noun, Adjective, Noun])
            .categories(Noun, ["animals"]);
        let groups = resolve_groups(Some(3), Some(&opts)).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].position.part_of_speech, Noun);
        assert_eq!(groups[1].repeat, 2);
        assert!(groups[1].position.categories.unwrap().contains("animals"));
        assert!(matches!(
            resolve_groups(Some(2), Some(&opts)),
            Err(SlugError::PartsOfSpeechLength { expected: 2, actual: 3 })
        ));
    }

    #[test]
    fn overlay_replaces_whole_fields() {
        let base = SlugOptions::new()
            .categories(PartOfSpeech::Noun, ["animals"])
            .case(CaseStyle::Title);
        let over = SlugOptions::new().categories(PartOfSpeech::Adjective, ["colors"]);
        let merged = base.overlay(over);
        let cats = merged.categories.unwrap();
        assert!(!cats.contains_key(&PartOfSpeech::Noun));
        assert!(cats.contains_key(&PartOfSpeech::Adjective));
        assert_eq!(merged.case, Some(CaseStyle::Title));
    }

    #[test]
    fn read_config_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let file = read_config(&dir.path().join("slugs.toml")).unwrap();
        assert_eq!(file, SlugFile::default());
    }

    #[test]
    fn read_config_parses_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slugs.toml");
        std::fs::write(
            &path,
            r#"
word_count = 2
parts_of_speech = ["adjective", "noun"]
case = "camel"

[categories]
noun = ["animals", "place"]
"#,
        )
        .unwrap();

        let file = read_config(&path).unwrap();
        assert_eq!(file.word_count, Some(2));
        assert_eq!(file.options.case, Some(CaseStyle::Camel));
        let nouns = &file.options.categories.unwrap()[&PartOfSpeech::Noun];
        assert!(nouns.contains("place"));
    }

    #[test]
    fn read_config_rejects_unknown_part_of_speech() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slugs.toml");
        std::fs::write(&path, "parts_of_speech = [\"verb\"]\n").unwrap();
        assert!(matches!(read_config(&path), Err(SlugError::TomlDe(_))));
    }
}
