use std::{fs, path::PathBuf};

use rand::seq::SliceRandom;
use squirrel_rng::SquirrelRng;
use tracing::warn;

use crate::{Error, Result};

/// Supplies candidate words for new games.
pub trait WordSource {
    fn random_word(&mut self) -> Result<String>;
}

/// A word list on disk, read fresh every time a word is requested.
#[derive(Debug)]
pub struct WordFile {
    path: PathBuf,
    rng: SquirrelRng,
}

impl WordFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            rng: SquirrelRng::new(),
        }
    }

    pub fn with_seed(path: impl Into<PathBuf>, seed: u32) -> Self {
        Self {
            path: path.into(),
            rng: SquirrelRng::with_seed(seed),
        }
    }
}

impl WordSource for WordFile {
    fn random_word(&mut self) -> Result<String> {
        let text = fs::read_to_string(&self.path).map_err(|source| {
            warn!(path = %self.path.display(), %source, "word list unavailable");
            Error::WordFile {
                path: self.path.clone(),
                source,
            }
        })?;

        parse_words(&text)
            .choose(&mut self.rng)
            .cloned()
            .ok_or(Error::NoWords)
    }
}

/// An in-memory word list.
#[derive(Debug)]
pub struct WordList {
    words: Vec<String>,
    rng: SquirrelRng,
}

impl WordList {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            rng: SquirrelRng::new(),
        }
    }

    pub fn with_seed(words: Vec<String>, seed: u32) -> Self {
        Self {
            words,
            rng: SquirrelRng::with_seed(seed),
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self::new(parse_words(text))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl WordSource for WordList {
    fn random_word(&mut self) -> Result<String> {
        self.words
            .choose(&mut self.rng)
            .cloned()
            .ok_or(Error::NoWords)
    }
}

/// One candidate per line. Lines that can't be played (blank, or holding anything other than
/// ASCII letters) are dropped.
pub fn parse_words(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|word| !word.is_empty() && word.bytes().all(|u| u.is_ascii_alphabetic()))
        .map(|word| word.to_ascii_uppercase())
        .collect()
}
