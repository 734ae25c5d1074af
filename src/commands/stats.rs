use std::collections::BTreeMap;

use random_word_slugs::format::{bullet_list, group_thousands};
use random_word_slugs::words::{categories, lookup};
use random_word_slugs::{count_combinations, PartOfSpeech, Result};
use serde::Serialize;

use crate::ui;

#[derive(Debug, Serialize)]
struct Stats {
    unique_combinations: u128,
    words: BTreeMap<PartOfSpeech, usize>,
    categories: BTreeMap<PartOfSpeech, Vec<&'static str>>,
}

fn collect() -> Result<Stats> {
    let mut words = BTreeMap::new();
    let mut cats = BTreeMap::new();
    for pos in PartOfSpeech::ALL {
        words.insert(pos, lookup(pos, None)?.len());
        cats.insert(pos, categories(pos)?);
    }
    Ok(Stats {
        unique_combinations: count_combinations(None, None)?,
        words,
        categories: cats,
    })
}

pub fn run(json: bool) -> Result<()> {
    let stats = collect()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!(
        "{}",
        ui::stat_line("Unique combinations:", &group_thousands(stats.unique_combinations))
    );
    for (pos, count) in &stats.words {
        println!("{}", ui::stat_line(&format!("{} words:", pos), &count.to_string()));
    }
    for (pos, list) in &stats.categories {
        println!();
        println!("{}", ui::heading(&format!("{} categories", pos)));
        println!("{}", bullet_list(list));
    }
    Ok(())
}
