use random_word_slugs::{count_combinations, Result};

use crate::cli::SlugArgs;

pub fn run(args: &SlugArgs) -> Result<()> {
    let (word_count, options) = super::slug_options(args)?;
    let total = count_combinations(word_count, Some(&options))?;
    println!("{}", total);
    Ok(())
}
