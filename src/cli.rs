use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "random-word-slugs",
    version,
    about = "Generate human-readable random word slugs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Word count, filters and case shared by `generate` and `count`
#[derive(Args, Debug)]
pub struct SlugArgs {
    /// Number of words (default 3)
    #[arg(allow_negative_numbers = true)]
    pub count: Option<i64>,
    /// Part of speech for each position, comma separated (e.g. adjective,noun)
    #[arg(long = "pos", value_delimiter = ',')]
    pub parts_of_speech: Vec<String>,
    /// Only use adjectives tagged with one of these categories
    #[arg(long, value_delimiter = ',')]
    pub adjective_categories: Vec<String>,
    /// Only use nouns tagged with one of these categories
    #[arg(long, value_delimiter = ',')]
    pub noun_categories: Vec<String>,
    /// Output case: kebab, camel, title, lower or sentence
    #[arg(long)]
    pub case: Option<String>,
    /// TOML file with defaults; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print random slugs
    Generate {
        #[command(flatten)]
        slug: SlugArgs,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// How many slugs to print
        #[arg(long, default_value_t = 1)]
        amount: usize,
    },

    /// Print how many distinct slugs a configuration can produce
    Count {
        #[command(flatten)]
        slug: SlugArgs,
    },

    /// List the categories available for filtering
    Categories {
        /// Only list categories for this part of speech
        #[arg(long)]
        pos: Option<String>,
    },

    /// Summarize the word list: default combinations and categories
    Stats {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
