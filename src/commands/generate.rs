use rand::rngs::StdRng;
use rand::SeedableRng;
use random_word_slugs::{Result, SlugGenerator};

use crate::cli::SlugArgs;

pub fn run(args: &SlugArgs, seed: Option<u64>, amount: usize) -> Result<()> {
    let (word_count, options) = super::slug_options(args)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let generator = SlugGenerator::default();
    for _ in 0..amount {
        let slug = generator.generate_with(&mut rng, word_count, Some(&options))?;
        println!("{}", slug);
    }
    Ok(())
}
