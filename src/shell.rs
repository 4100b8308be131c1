use std::io::BufRead;

use hangman::{Error, Game, State, WordSource};
use tracing::{error, warn};

use crate::view::View;

type Result<T, E = anyhow::Error> = std::result::Result<T, E>;

const HELP: &[(&str, &str, &str)] = &[
    ("new", "new", "Initializes and starts a new game."),
    ("guess", "guess <letter>", "Guesses a letter."),
    ("short", "short", "Toggles whether to allow short guesses."),
    ("quit", "quit", "Quits the application."),
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// What the shell remembers between commands.
#[derive(Debug, Default)]
pub struct Session {
    game: Option<Game>,
    short: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Empty,
    New,
    Guess(&'a str),
    Short,
    Quit,
    Help(Option<&'a str>),
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Command::Empty;
        }

        if let Some(topic) = line.strip_prefix('?') {
            return Command::Help(topic_of(topic));
        }

        let (name, arg) = match line.find(|c: char| !c.is_ascii_alphanumeric() && c != '_') {
            Some(idx) => line.split_at(idx),
            None => (line, ""),
        };
        let arg = arg.trim();

        match name.to_ascii_lowercase().as_str() {
            "new" => Command::New,
            "guess" => Command::Guess(arg),
            "short" => Command::Short,
            "quit" => Command::Quit,
            "help" => Command::Help(topic_of(arg)),
            _ => Command::Unknown(line),
        }
    }
}

fn topic_of(arg: &str) -> Option<&str> {
    let arg = arg.trim();
    (!arg.is_empty()).then_some(arg)
}

pub struct Shell<S, V> {
    session: Session,
    words: S,
    view: V,
}

impl<S: WordSource, V: View> Shell<S, V> {
    pub fn new(words: S, view: V) -> Self {
        Self {
            session: Session::default(),
            words,
            view,
        }
    }

    pub fn short_guesses(mut self, enabled: bool) -> Self {
        self.session.short = enabled;
        self
    }

    /// Reads commands until `quit`, end of input, or a fatal game error.
    pub fn run(&mut self, input: impl BufRead) -> Result<()> {
        self.view.banner()?;

        let mut lines = input.lines();
        loop {
            self.view.prompt()?;
            let line = match lines.next() {
                Some(line) => line?,
                None => {
                    self.quit()?;
                    return Ok(());
                }
            };

            if self.execute(&line)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    pub fn execute(&mut self, line: &str) -> Result<Flow> {
        match Command::parse(line) {
            Command::Empty => self.show()?,
            Command::New => self.new_game()?,
            Command::Guess(arg) => self.guess(arg)?,
            Command::Short => {
                self.session.short = !self.session.short;
                self.view
                    .info(&format!("Accepting short guesses: {}", self.session.short))?;
            }
            Command::Quit => return self.quit(),
            Command::Help(None) => {
                let names: Vec<_> = HELP.iter().map(|&(name, ..)| name).collect();
                self.view.command_list(&names)?;
            }
            Command::Help(Some(topic)) => {
                let topic = topic.to_ascii_lowercase();
                match HELP.iter().find(|&&(name, ..)| name == topic) {
                    Some(&(name, usage, description)) => {
                        self.view
                            .command_help(&name.to_ascii_uppercase(), usage, description)?
                    }
                    None => self.view.error(&format!("No help on {topic}"))?,
                }
            }
            Command::Unknown(line) if self.session.short => self.guess(line)?,
            Command::Unknown(line) => self.view.error(&format!("Unknown command: {line}"))?,
        }

        Ok(Flow::Continue)
    }

    fn quit(&mut self) -> Result<Flow> {
        self.view.info("Good bye; thanks for playing.")?;
        self.session.game = None;
        Ok(Flow::Quit)
    }

    fn show(&mut self) -> Result<()> {
        match &self.session.game {
            Some(game) => {
                self.view
                    .update(&game.hint(), game.score(), game.remaining(), &game.misses())?
            }
            None => self
                .view
                .info("No game in progress; type 'new' to start one.")?,
        }
        Ok(())
    }

    fn new_game(&mut self) -> Result<()> {
        self.session.game = None;
        self.view.info("Beginning a new game!")?;

        match Game::create(&mut self.words) {
            Ok(game) => {
                self.view
                    .update(&game.hint(), game.score(), game.remaining(), &game.misses())?;
                self.session.game = Some(game);
            }
            Err(e) => {
                warn!(%e, "unable to start a game");
                self.view
                    .error(&format!("Unable to start a new game: {e}"))?;
            }
        }

        Ok(())
    }

    fn guess(&mut self, arg: &str) -> Result<()> {
        let game = match self.session.game.as_mut() {
            Some(game) => game,
            None => {
                self.view
                    .error("Please start a new game before guessing a letter!")?;
                return Ok(());
            }
        };

        let mut chars = arg.chars();
        let letter = match (chars.next(), chars.next()) {
            (None, _) => {
                self.view.error("You cannot guess 'nothing'.")?;
                return Ok(());
            }
            (Some(_), Some(_)) => {
                self.view.error("You cannot guess more than one letter.")?;
                return Ok(());
            }
            (Some(letter), None) => letter,
        };

        if !letter.is_ascii_alphabetic() {
            self.view.error("You can only guess letters.")?;
            return Ok(());
        }

        // The outcome is settled before anything is drawn; a finished game is never handed to
        // `update`, whose gallows art stops at `MAX_WRONG`.
        match game.guess(letter) {
            Ok(State::Playing) => self
                .view
                .update(&game.hint(), game.score(), game.remaining(), &game.misses())?,
            Ok(state) => {
                if state == State::Victory {
                    self.view.success("Congratulations! You won!")?;
                } else {
                    self.view.error("I'm sorry, you lost...")?;
                }
                self.view.reveal(game.word())?;
                self.session.game = None;
            }
            Err(Error::DuplicateGuess(_)) => {
                self.view.error("You already guessed that letter!")?;
            }
            Err(e) => {
                error!(%e, "guess on a finished game");
                self.view.system_error("Unexpected game state; quitting!")?;
                self.session.game = None;
                return Err(e.into());
            }
        }

        Ok(())
    }
}
