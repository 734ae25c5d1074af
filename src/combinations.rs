use crate::config::{resolve_groups, PositionGroup, SlugOptions};
use crate::error::{Result, SlugError};
use crate::words::WordDataset;

/// `size` raised to `repeat` without overflowing `u128`.
fn checked_power(size: u128, repeat: u64) -> Result<u128> {
    match size {
        0 | 1 => Ok(if repeat == 0 { 1 } else { size }),
        _ => u32::try_from(repeat)
            .ok()
            .and_then(|exp| size.checked_pow(exp))
            .ok_or(SlugError::CombinationOverflow),
    }
}

/// Number of distinct slugs the grouped positions can produce from `dataset`.
/// Zero when any position has no candidates.
pub fn count_groups(dataset: &WordDataset, groups: &[PositionGroup<'_>]) -> Result<u128> {
    let sizes = groups
        .iter()
        .map(|g| -> Result<(u128, u64)> {
            let size = dataset.count(g.position.part_of_speech, g.position.categories)?;
            Ok((size as u128, g.repeat))
        })
        .collect::<Result<Vec<_>>>()?;

    if sizes.iter().any(|&(size, repeat)| size == 0 && repeat > 0) {
        return Ok(0);
    }
    sizes.into_iter().try_fold(1u128, |total, (size, repeat)| {
        total
            .checked_mul(checked_power(size, repeat)?)
            .ok_or(SlugError::CombinationOverflow)
    })
}

/// Count possible slugs for the built-in word list without generating any.
pub fn count_combinations(word_count: Option<i64>, options: Option<&SlugOptions>) -> Result<u128> {
    let groups = resolve_groups(word_count, options)?;
    count_groups(WordDataset::builtin(), &groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::PartOfSpeech;

    const ADJECTIVES: u128 = 13;
    const NOUNS: u128 = 38;

    #[test]
    fn default_count_is_adjectives_pow_then_nouns() {
        for n in 1..=6u32 {
            let expected = ADJECTIVES.pow(n - 1) * NOUNS;
            assert_eq!(count_combinations(Some(n as i64), None).unwrap(), expected);
        }
        assert_eq!(count_combinations(None, None).unwrap(), 13 * 13 * 38);
    }

    #[test]
    fn filters_shrink_the_count() {
        let opts = SlugOptions::new()
            .categories(PartOfSpeech::Adjective, ["colors", "emotions"])
            .categories(PartOfSpeech::Noun, ["animals"]);
        assert_eq!(count_combinations(Some(3), Some(&opts)).unwrap(), 2 * 2 * 9);
    }

    #[test]
    fn follows_explicit_parts_of_speech() {
        let opts = SlugOptions::new().parts_of_speech([PartOfSpeech::Noun, PartOfSpeech::Adjective]);
        assert_eq!(count_combinations(Some(2), Some(&opts)).unwrap(), NOUNS * ADJECTIVES);
    }

    #[test]
    fn empty_position_counts_zero() {
        let opts = SlugOptions::new().categories(PartOfSpeech::Noun, ["spaceships"]);
        assert_eq!(count_combinations(None, Some(&opts)).unwrap(), 0);
    }

    #[test]
    fn zero_wins_over_overflow() {
        let opts = SlugOptions::new().categories(PartOfSpeech::Noun, ["spaceships"]);
        assert_eq!(count_combinations(Some(200), Some(&opts)).unwrap(), 0);
    }

    #[test]
    fn largest_word_count_overflows_without_allocating() {
        assert!(matches!(
            count_combinations(Some(i64::MAX), None),
            Err(SlugError::CombinationOverflow)
        ));
    }

    #[test]
    fn largest_word_count_with_empty_nouns_is_zero() {
        let opts = SlugOptions::new().categories(PartOfSpeech::Noun, ["spaceships"]);
        assert_eq!(count_combinations(Some(i64::MAX), Some(&opts)).unwrap(), 0);
    }

    #[test]
    fn single_candidate_never_overflows() {
        let opts = SlugOptions::new()
            .categories(PartOfSpeech::Adjective, ["colors"])
            .categories(PartOfSpeech::Noun, ["technology"]);
        assert_eq!(count_combinations(Some(i64::MAX), Some(&opts)).unwrap(), 1);
    }

    #[test]
    fn power_helper_edges() {
        assert_eq!(checked_power(13, 0).unwrap(), 1);
        assert_eq!(checked_power(0, 0).unwrap(), 1);
        assert_eq!(checked_power(2, 127).unwrap(), 1u128 << 127);
        assert!(matches!(checked_power(2, 128), Err(SlugError::CombinationOverflow)));
        assert!(matches!(checked_power(2, u64::MAX), Err(SlugError::CombinationOverflow)));
    }

    #[test]
    fn huge_counts_overflow() {
        assert!(matches!(
            count_combinations(Some(200), None),
            Err(SlugError::CombinationOverflow)
        ));
    }

    #[test]
    fn invalid_word_count_is_still_an_error() {
        assert!(matches!(
            count_combinations(Some(0), None),
            Err(SlugError::InvalidWordCount(0))
        ));
    }
}
