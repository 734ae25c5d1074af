use random_word_slugs::format::bullet_list;
use random_word_slugs::words::categories;
use random_word_slugs::{PartOfSpeech, Result};

use crate::ui;

pub fn run(pos: Option<&str>) -> Result<()> {
    match pos {
        Some(pos) => {
            let pos: PartOfSpeech = pos.parse()?;
            for category in categories(pos)? {
                println!("{}", category);
            }
        }
        None => {
            for pos in PartOfSpeech::ALL {
                println!("{}", ui::heading(&format!("{} categories", pos)));
                println!("{}", bullet_list(&categories(pos)?));
            }
        }
    }
    Ok(())
}
