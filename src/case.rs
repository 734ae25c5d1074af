use std::fmt;

use serde::Deserialize;

/// Rendering convention applied to the chosen words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum CaseStyle {
    #[default]
    Kebab,
    Camel,
    Title,
    Lower,
    Sentence,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 5] = [
        CaseStyle::Kebab,
        CaseStyle::Camel,
        CaseStyle::Title,
        CaseStyle::Lower,
        CaseStyle::Sentence,
    ];

    /// Parse a style name. Anything unrecognized falls back to `Title`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "kebab" => CaseStyle::Kebab,
            "camel" => CaseStyle::Camel,
            "lower" => CaseStyle::Lower,
            "sentence" => CaseStyle::Sentence,
            _ => CaseStyle::Title,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CaseStyle::Kebab => "kebab",
            CaseStyle::Camel => "camel",
            CaseStyle::Title => "title",
            CaseStyle::Lower => "lower",
            CaseStyle::Sentence => "sentence",
        }
    }
}

impl From<String> for CaseStyle {
    fn from(name: String) -> Self {
        CaseStyle::from_name(&name)
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First character uppercased, the rest lowercased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Render `words` in the given case style.
///
/// `Sentence` only normalizes the first word; later words are kept exactly as given.
pub fn format_words<S: AsRef<str>>(words: &[S], style: CaseStyle) -> String {
    let words = words.iter().map(AsRef::as_ref);
    match style {
        CaseStyle::Kebab => words.map(str::to_lowercase).collect::<Vec<_>>().join("-"),
        CaseStyle::Camel => words
            .enumerate()
            .map(|(i, w)| if i == 0 { w.to_lowercase() } else { capitalize(w) })
            .collect(),
        CaseStyle::Lower => words.map(str::to_lowercase).collect::<Vec<_>>().join(" "),
        CaseStyle::Sentence => words
            .enumerate()
            .map(|(i, w)| if i == 0 { capitalize(w) } else { w.to_string() })
            .collect::<Vec<_>>()
            .join(" "),
        CaseStyle::Title => words.map(capitalize).collect::<Vec<_>>().join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 3] = ["quick", "brown", "fox"];

    #[test]
    fn renders_each_style() {
        assert_eq!(format_words(&WORDS, CaseStyle::Kebab), "quick-brown-fox");
        assert_eq!(format_words(&WORDS, CaseStyle::Camel), "quickBrownFox");
        assert_eq!(format_words(&WORDS, CaseStyle::Lower), "quick brown fox");
        assert_eq!(format_words(&WORDS, CaseStyle::Title), "Quick Brown Fox");
        assert_eq!(format_words(&WORDS, CaseStyle::Sentence), "Quick brown fox");
    }

    #[test]
    fn sentence_leaves_later_words_untouched() {
        let words = ["qUICK", "BROWN", "Fox"];
        assert_eq!(format_words(&words, CaseStyle::Sentence), "Quick BROWN Fox");
    }

    #[test]
    fn normalizing_styles_fix_mixed_input() {
        let words = ["qUICK", "BROWN", "fOX"];
        assert_eq!(format_words(&words, CaseStyle::Kebab), "quick-brown-fox");
        assert_eq!(format_words(&words, CaseStyle::Camel), "quickBrownFox");
        assert_eq!(format_words(&words, CaseStyle::Title), "Quick Brown Fox");
    }

    #[test]
    fn single_and_empty_words() {
        assert_eq!(format_words(&["fox"], CaseStyle::Camel), "fox");
        assert_eq!(format_words(&["", "fox"], CaseStyle::Title), " Fox");
        assert_eq!(format_words::<&str>(&[], CaseStyle::Kebab), "");
    }

    #[test]
    fn unknown_style_falls_back_to_title() {
        assert_eq!(CaseStyle::from_name("screaming"), CaseStyle::Title);
        assert_eq!(CaseStyle::from_name("Camel"), CaseStyle::Camel);
        assert_eq!(CaseStyle::default(), CaseStyle::Kebab);
    }

    #[test]
    fn names_round_trip_through_from_name() {
        for style in CaseStyle::ALL {
            assert_eq!(CaseStyle::from_name(style.as_str()), style);
        }
    }
}
