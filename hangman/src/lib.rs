use std::{fmt, io, path::PathBuf};

use hashbrown::HashSet;
use tracing::debug;

mod words;

pub use words::{parse_words, WordFile, WordList, WordSource};

/// The number of wrong guesses a player may make and still be playing.
///
/// Failure is declared on the guess that pushes the score past this value, so a player actually
/// gets `MAX_WRONG + 1` misses before the game is lost.
pub const MAX_WRONG: usize = 6;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to read word list {}", .path.display())]
    WordFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list contains no usable words")]
    NoWords,
    #[error("guesses must be unique - {0} has already been guessed")]
    DuplicateGuess(char),
    #[error("guess rejected: game is already over ({0})")]
    InvalidState(State),
}

impl Error {
    /// True for failures of the word source rather than of the game itself.
    pub fn is_resource_unavailable(&self) -> bool {
        matches!(self, Error::WordFile { .. } | Error::NoWords)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    Playing,
    Victory,
    Failure,
}

impl State {
    pub fn is_terminal(self) -> bool {
        self != State::Playing
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Playing => f.write_str("playing"),
            State::Victory => f.write_str("victory"),
            State::Failure => f.write_str("failure"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Game {
    word: String,
    letters: HashSet<char>,
    guesses: HashSet<char>,
    state: State,
}

impl Game {
    pub fn new(word: impl AsRef<str>) -> Self {
        let word = word.as_ref().trim().to_ascii_uppercase();
        let letters = word.chars().collect();
        Self {
            word,
            letters,
            guesses: HashSet::new(),
            state: State::Playing,
        }
    }

    /// Starts a game on a word drawn from `source`.
    pub fn create(source: &mut impl WordSource) -> Result<Self> {
        let game = Self::new(source.random_word()?);
        debug!(len = game.word.len(), "created game");
        Ok(game)
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn letters(&self) -> &HashSet<char> {
        &self.letters
    }

    pub fn guesses(&self) -> &HashSet<char> {
        &self.guesses
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// The word with every unguessed letter masked, letters separated by spaces.
    pub fn hint(&self) -> String {
        let mut hint = String::with_capacity(self.word.len() * 2);
        for c in self.word.chars() {
            if !hint.is_empty() {
                hint.push(' ');
            }
            hint.push(if self.guesses.contains(&c) { c } else { '_' });
        }
        hint
    }

    pub fn tally(&self) -> usize {
        self.guesses.len()
    }

    /// Number of distinct wrong guesses.
    pub fn score(&self) -> usize {
        self.guesses.difference(&self.letters).count()
    }

    pub fn misses(&self) -> Vec<char> {
        let mut misses: Vec<_> = self.guesses.difference(&self.letters).copied().collect();
        misses.sort_unstable();
        misses
    }

    pub fn remaining(&self) -> usize {
        (MAX_WRONG + 1).saturating_sub(self.score())
    }

    /// Records a guess and returns the state it leaves the game in.
    ///
    /// A completed word is checked before the miss count, so the final correct letter wins even
    /// when the player is out of slack.
    pub fn guess(&mut self, letter: char) -> Result<State> {
        if self.state.is_terminal() {
            return Err(Error::InvalidState(self.state));
        }

        let letter = letter.to_ascii_uppercase();
        if !self.guesses.insert(letter) {
            return Err(Error::DuplicateGuess(letter));
        }

        if self.guesses.is_superset(&self.letters) {
            self.state = State::Victory;
        } else if self.score() > MAX_WRONG {
            self.state = State::Failure;
        }

        debug!(%letter, score = self.score(), state = %self.state, "guess");
        Ok(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(word: &str, letters: &str) -> Game {
        let mut game = Game::new(word);
        for letter in letters.chars() {
            game.guess(letter).unwrap();
        }
        game
    }

    #[test]
    fn cat_scenario() {
        let mut game = Game::new("CAT");

        assert_eq!(game.guess('A').unwrap(), State::Playing);
        assert_eq!(game.hint(), "_ A _");

        assert_eq!(game.guess('T').unwrap(), State::Playing);
        assert_eq!(game.hint(), "_ A T");

        assert_eq!(game.guess('C').unwrap(), State::Victory);
        assert_eq!(game.hint(), "C A T");
    }

    #[test]
    fn any_order_of_distinct_letters_wins() {
        for order in ["LEVR", "REVL", "VLER", "ELRV"] {
            let game = play("lever", order);
            assert_eq!(game.state(), State::Victory, "order {order}");
            assert_eq!(game.score(), 0);
        }
    }

    #[test]
    fn seventh_miss_loses() {
        let mut game = play("DOG", "XYZQJK");
        assert_eq!(game.score(), MAX_WRONG);
        assert_eq!(game.state(), State::Playing);
        assert_eq!(game.remaining(), 1);

        assert_eq!(game.guess('V').unwrap(), State::Failure);
        assert_eq!(game.score(), MAX_WRONG + 1);
        assert_eq!(game.remaining(), 0);
    }

    #[test]
    fn completing_the_word_beats_the_miss_limit() {
        let mut game = play("DOG", "XYZQJKDO");
        assert_eq!(game.score(), MAX_WRONG);
        assert_eq!(game.guess('G').unwrap(), State::Victory);
    }

    #[test]
    fn duplicate_guess_changes_nothing() {
        let mut game = play("DOG", "dx");
        let guesses = game.guesses().clone();

        assert!(matches!(game.guess('D'), Err(Error::DuplicateGuess('D'))));
        assert!(matches!(game.guess('x'), Err(Error::DuplicateGuess('X'))));
        assert_eq!(game.guesses(), &guesses);
        assert_eq!(game.score(), 1);
        assert_eq!(game.tally(), 2);
        assert_eq!(game.state(), State::Playing);
    }

    #[test]
    fn finished_game_rejects_guesses() {
        let mut game = play("AT", "AT");
        assert!(matches!(
            game.guess('Q'),
            Err(Error::InvalidState(State::Victory))
        ));
        assert_eq!(game.tally(), 2);
    }

    #[test]
    fn score_tracks_wrong_guesses() {
        let mut game = Game::new("BANANA");
        let mut wrong = 0;
        for letter in "BQNZA".chars() {
            game.guess(letter).unwrap();
            if !game.letters().contains(&letter) {
                wrong += 1;
            }
            assert_eq!(game.score(), wrong);
            assert_eq!(game.score(), game.guesses().difference(game.letters()).count());
        }
        assert_eq!(game.misses(), vec!['Q', 'Z']);
        assert_eq!(game.tally(), 5);
    }

    #[test]
    fn hint_masks_each_position() {
        let game = play(" banana\n", "n");
        assert_eq!(game.word(), "BANANA");
        assert_eq!(game.hint(), "_ _ N _ N _");
        assert_eq!(game.hint().replace(' ', "").len(), game.word().len());
    }

    #[test]
    fn create_propagates_empty_source() {
        let mut source = WordList::new(Vec::new());
        let err = Game::create(&mut source).unwrap_err();
        assert!(err.is_resource_unavailable());
    }
}
