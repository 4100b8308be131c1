use std::io::{self, Write};

use colored::Colorize;

use crate::scaffold;

/// Everything the shell shows the player goes through here.
pub trait View {
    fn banner(&mut self) -> io::Result<()>;
    fn prompt(&mut self) -> io::Result<()>;
    fn info(&mut self, message: &str) -> io::Result<()>;
    fn success(&mut self, message: &str) -> io::Result<()>;
    fn error(&mut self, message: &str) -> io::Result<()>;
    fn system_error(&mut self, message: &str) -> io::Result<()>;
    fn command_list(&mut self, commands: &[&str]) -> io::Result<()>;
    fn command_help(&mut self, label: &str, usage: &str, description: &str) -> io::Result<()>;

    /// Shows a game in progress. `score` never exceeds `MAX_WRONG` here; finished games are
    /// reported through `success`/`error` instead.
    fn update(
        &mut self,
        hint: &str,
        score: usize,
        remaining: usize,
        misses: &[char],
    ) -> io::Result<()>;

    /// Shows the secret word once a game is over.
    fn reveal(&mut self, word: &str) -> io::Result<()>;
}

pub struct TerminalView<W> {
    out: W,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> View for TerminalView<W> {
    fn banner(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "\n{}{}",
            "Welcome to HungMen!".bright_cyan(),
            " ('?' for help)".cyan()
        )
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "\n{} ", ">".bright_blue())?;
        self.out.flush()
    }

    fn info(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "\n{}", message.bright_white())
    }

    fn success(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "\n{}", message.bright_green())
    }

    fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "\n{}", message.bright_red())
    }

    fn system_error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "\n{}", message.bright_magenta())
    }

    fn command_list(&mut self, commands: &[&str]) -> io::Result<()> {
        writeln!(
            self.out,
            "\n{}{}",
            "Commands".bright_cyan(),
            " (? <command>)".cyan()
        )?;
        writeln!(self.out, "{}", "-".repeat(8).bright_blue())?;
        writeln!(self.out, "{}", commands.join("  "))
    }

    fn command_help(&mut self, label: &str, usage: &str, description: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "\n{} {} {}",
            "--=<".yellow(),
            label.bright_cyan(),
            ">=--".yellow()
        )?;
        writeln!(self.out, "{}", usage.bright_green())?;
        writeln!(self.out, "{description}")
    }

    fn update(
        &mut self,
        hint: &str,
        score: usize,
        remaining: usize,
        misses: &[char],
    ) -> io::Result<()> {
        writeln!(self.out, "{}", scaffold::frame(score).white().dimmed())?;
        if !misses.is_empty() {
            let misses: Vec<_> = misses.iter().map(char::to_string).collect();
            writeln!(self.out, "Misses: {}", misses.join(" ").red())?;
        }
        writeln!(self.out, "Guesses left: {}", remaining.to_string().yellow())?;
        writeln!(self.out, "{}", hint.bright_cyan())
    }

    fn reveal(&mut self, word: &str) -> io::Result<()> {
        writeln!(self.out, "\n{} {}", "The word was".bright_white(), word.bright_yellow())
    }
}
