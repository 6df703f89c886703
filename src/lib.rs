use chrono::{DateTime, Utc};
use rand::Rng;
use std::{
    io::{BufRead, Write},
    num::{IntErrorKind, ParseIntError},
    ops::RangeInclusive,
    time::{Duration, Instant},
};
use thiserror::Error;
use tracing::{debug, info};

/// Inclusive range the secret is drawn from.
pub const SECRET_RANGE: RangeInclusive<i64> = 0..=9;

pub const PROMPT: &str = "Enter your guess between 0 and 9: ";
pub const TOO_SMALL: &str = "your guess is too small";
pub const TOO_LARGE: &str = "your guess is too large";
pub const YOU_WIN: &str = "You win";

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid guess {input:?}: {source}")]
    InvalidGuess {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("input ended before the secret number was guessed")]
    UnexpectedEof,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("secret {0} is outside {lo}..={hi}", lo = SECRET_RANGE.start(), hi = SECRET_RANGE.end())]
    SecretOutOfRange(i64),

    #[error("the game is already won")]
    AlreadyWon,
}

/// The number the player has to find. Fixed for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Secret(i64);

impl Secret {
    /// Draw a secret uniformly from [`SECRET_RANGE`].
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(SECRET_RANGE))
    }

    pub fn new(value: i64) -> Result<Self, GameError> {
        if SECRET_RANGE.contains(&value) {
            Ok(Self(value))
        } else {
            Err(GameError::SecretOutOfRange(value))
        }
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Outcome of comparing one guess with the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    TooSmall,
    TooLarge,
    Correct,
}

impl Feedback {
    /// Line shown to the player.
    pub fn message(&self) -> &'static str {
        match self {
            Feedback::TooSmall => TOO_SMALL,
            Feedback::TooLarge => TOO_LARGE,
            Feedback::Correct => YOU_WIN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingGuess,
    Won,
}

/// Result of a finished (or in-progress) session.
#[derive(Debug, Clone)]
pub struct GameSummary {
    pub secret: i64,
    pub attempts: u64,
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
}

pub fn check_guess(guess: i64, secret: Secret) -> Feedback {
    if guess == secret.value() {
        Feedback::Correct
    } else if guess < secret.value() {
        Feedback::TooSmall
    } else {
        Feedback::TooLarge
    }
}

/// Parse one line of player input. Surrounding whitespace and a leading sign are allowed.
///
/// Integers too wide for `i64` clamp to `i64::MAX`/`i64::MIN`; the secret is
/// always inside [`SECRET_RANGE`] so the feedback direction is unchanged.
pub fn parse_guess(line: &str) -> Result<i64, GameError> {
    let trimmed = line.trim();
    match trimmed.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(source) => match source.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(GameError::InvalidGuess {
                input: trimmed.to_string(),
                source,
            }),
        },
    }
}

#[derive(Debug)]
pub struct Game {
    secret: Secret,
    state: GameState,
    attempts: u64,
    started_at: DateTime<Utc>,
    clock: Instant,
}

impl Game {
    pub fn new(secret: Secret) -> Self {
        Self {
            secret,
            state: GameState::AwaitingGuess,
            attempts: 0,
            started_at: Utc::now(),
            clock: Instant::now(),
        }
    }

    /// Submit one guess. Only an exact match moves the game to [`GameState::Won`].
    pub fn guess(&mut self, value: i64) -> Result<Feedback, GameError> {
        if self.state == GameState::Won {
            return Err(GameError::AlreadyWon);
        }

        self.attempts = self.attempts.saturating_add(1);
        let feedback = check_guess(value, self.secret);
        debug!(attempt = self.attempts, guess = value, ?feedback, "guess checked");

        if feedback == Feedback::Correct {
            self.state = GameState::Won;
        }
        Ok(feedback)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            secret: self.secret.value(),
            attempts: self.attempts,
            started_at: self.started_at,
            elapsed: self.clock.elapsed(),
        }
    }
}

/// Run the prompt/guess loop until the player wins.
///
/// Reads one line per round from `input`. Bad input ends the loop with an
/// error; nothing after the offending line is read.
pub fn play<R: BufRead, W: Write>(
    mut game: Game,
    mut input: R,
    mut output: W,
) -> Result<GameSummary, GameError> {
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(GameError::UnexpectedEof);
        }

        let guess = parse_guess(&line)?;
        let feedback = game.guess(guess)?;
        writeln!(output, "{}", feedback.message())?;

        if game.state() == GameState::Won {
            let summary = game.summary();
            info!(
                attempts = summary.attempts,
                elapsed = ?summary.elapsed,
                "secret found"
            );
            return Ok(summary);
        }
    }
}
