use hangman::MAX_WRONG;

/// Gallows art, one frame per wrong guess.
pub const SCAFFOLD: [&str; MAX_WRONG + 1] = [
    "
  +---+
  |   |
      |
      |
      |
      |
=========",
    "
  +---+
  |   |
  O   |
      |
      |
      |
=========",
    "
  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    "
  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
=========",
];

pub fn frame(score: usize) -> &'static str {
    SCAFFOLD[score.min(MAX_WRONG)]
}
