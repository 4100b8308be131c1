use std::{io, path::PathBuf, process};

use clap::Parser;
use hangman::WordFile;
use shell::Shell;
use tracing_subscriber::EnvFilter;
use view::TerminalView;

mod scaffold;
mod shell;
mod view;

#[derive(Clone, Debug, Parser)]
#[clap(version, about = "Play hangman from an interactive shell")]
struct Args {
    /// path to word list
    #[clap(short, long, value_parser, default_value = "words.txt")]
    words: PathBuf,

    /// seed for word selection, for repeatable games
    #[clap(long, value_parser)]
    seed: Option<u32>,

    /// accept a bare letter as a guess from the start
    #[clap(long)]
    short: bool,

    /// disable colored output
    #[clap(long)]
    no_color: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&Args::parse()) {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }

    let words = match args.seed {
        Some(seed) => WordFile::with_seed(&args.words, seed),
        None => WordFile::new(&args.words),
    };

    let mut shell = Shell::new(words, TerminalView::new(io::stdout())).short_guesses(args.short);
    shell.run(io::stdin().lock())
}
