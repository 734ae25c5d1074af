use rand::seq::SliceRandom;
use rand::Rng;

use crate::case::format_words;
use crate::combinations;
use crate::config::{resolve, resolve_groups, SlugOptions, SlugPlan};
use crate::error::{Result, SlugError};
use crate::words::WordDataset;

/// Draws slugs from a word dataset.
#[derive(Debug, Clone, Copy)]
pub struct SlugGenerator<'d> {
    dataset: &'d WordDataset,
}

impl Default for SlugGenerator<'static> {
    fn default() -> Self {
        SlugGenerator::new(WordDataset::builtin())
    }
}

impl<'d> SlugGenerator<'d> {
    pub fn new(dataset: &'d WordDataset) -> Self {
        SlugGenerator { dataset }
    }

    pub fn dataset(&self) -> &'d WordDataset {
        self.dataset
    }

    /// Generate one slug using the thread-local RNG.
    pub fn generate(&self, word_count: Option<i64>, options: Option<&SlugOptions>) -> Result<String> {
        self.generate_with(&mut rand::thread_rng(), word_count, options)
    }

    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        word_count: Option<i64>,
        options: Option<&SlugOptions>,
    ) -> Result<String> {
        let plan = resolve(word_count, options)?;
        let words = self.pick_words(rng, &plan)?;
        let slug = format_words(&words, plan.case);
        tracing::debug!(%slug, case = %plan.case, "generated slug");
        Ok(slug)
    }

    /// One uniformly chosen word per position of `plan`, before case rendering.
    pub fn pick_words<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        plan: &SlugPlan<'_>,
    ) -> Result<Vec<&'static str>> {
        plan.positions
            .iter()
            .enumerate()
            .map(|(position, pos)| {
                let candidates = self.dataset.lookup(pos.part_of_speech, pos.categories)?;
                tracing::debug!(
                    position,
                    part_of_speech = %pos.part_of_speech,
                    candidates = candidates.len(),
                    "selecting word"
                );
                candidates
                    .choose(rng)
                    .copied()
                    .ok_or(SlugError::NoCandidatesAvailable {
                        position,
                        part_of_speech: pos.part_of_speech,
                    })
            })
            .collect()
    }

    pub fn count_combinations(
        &self,
        word_count: Option<i64>,
        options: Option<&SlugOptions>,
    ) -> Result<u128> {
        let groups = resolve_groups(word_count, options)?;
        combinations::count_groups(self.dataset, &groups)
    }
}

/// Generate a slug from the built-in word list. `word_count` defaults to 3.
///
/// ```
/// let slug = random_word_slugs::generate(None, None).unwrap();
/// assert_eq!(slug.split('-').count(), 3);
/// ```
pub fn generate(word_count: Option<i64>, options: Option<&SlugOptions>) -> Result<String> {
    SlugGenerator::default().generate(word_count, options)
}
