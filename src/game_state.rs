use crate::error::WordleError;
use crate::feedback::FeedbackResult;
use crate::secret::Secret;
use crate::strategy::{Strategy, StrategyKind};
use crate::wordbank::Vocabulary;
use crate::{debug_log, info_log};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::fmt;

pub const MAX_GUESSES: usize = 6;

#[derive(Debug)]
pub enum GameStatus {
    Solved,
    OutOfGuesses,
    /// The strategy ran out of candidates
    NoSolution,
    /// The strategy produced a word the game does not accept
    Rejected(WordleError),
}

#[derive(Debug)]
pub struct GameOutcome {
    pub strategy: &'static str,
    pub answer: String,
    pub guesses: Vec<FeedbackResult>,
    pub status: GameStatus,
}

impl GameOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self.status, GameStatus::Solved)
    }

    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, feedback) in self.guesses.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, feedback)?;
        }
        match &self.status {
            GameStatus::Solved => write!(
                f,
                "Solved {} in {} guesses ({})",
                self.answer.to_uppercase(),
                self.guess_count(),
                self.strategy
            ),
            GameStatus::OutOfGuesses => write!(
                f,
                "Out of guesses, the answer was {} ({})",
                self.answer.to_uppercase(),
                self.strategy
            ),
            GameStatus::NoSolution => write!(
                f,
                "No candidates remain, the answer was {} ({})",
                self.answer.to_uppercase(),
                self.strategy
            ),
            GameStatus::Rejected(e) => write!(f, "Guess rejected: {e} ({})", self.strategy),
        }
    }
}

/// Play one game from a clean strategy state.
pub fn play_game(
    strategy: &mut dyn Strategy,
    secret: Secret,
    vocabulary: &Vocabulary,
    max_guesses: usize,
) -> GameOutcome {
    strategy.reset();
    let mut guesses: Vec<FeedbackResult> = Vec::new();

    let status = loop {
        if guesses.len() >= max_guesses {
            break GameStatus::OutOfGuesses;
        }
        let Some(guess) = strategy.next_guess(guesses.last()) else {
            break GameStatus::NoSolution;
        };
        let feedback = match secret.guess(&guess, vocabulary) {
            Ok(feedback) => feedback,
            Err(e) => break GameStatus::Rejected(e),
        };
        debug_log!("play_game() - {} guessed {}", strategy.name(), feedback);
        let solved = feedback.is_solved();
        guesses.push(feedback);
        if solved {
            break GameStatus::Solved;
        }
    };

    GameOutcome {
        strategy: strategy.name(),
        answer: secret.reveal(),
        guesses,
        status,
    }
}

/// Aggregate results of many games played by one strategy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkReport {
    pub strategy: String,
    pub games: usize,
    pub solved: usize,
    /// Guess count -> number of solved games
    pub distribution: BTreeMap<usize, usize>,
}

impl BenchmarkReport {
    fn record(&mut self, outcome: &GameOutcome) {
        self.games += 1;
        if outcome.is_solved() {
            self.solved += 1;
            *self.distribution.entry(outcome.guess_count()).or_insert(0) += 1;
        }
    }

    pub fn failed(&self) -> usize {
        self.games - self.solved
    }

    /// Mean guesses over solved games, `None` if nothing was solved.
    pub fn average_guesses(&self) -> Option<f64> {
        if self.solved == 0 {
            return None;
        }
        let total: usize = self
            .distribution
            .iter()
            .map(|(guesses, games)| guesses * games)
            .sum();
        Some(total as f64 / self.solved as f64)
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Strategy: {}", self.strategy)?;
        writeln!(f, "Games: {} (solved {}, failed {})", self.games, self.solved, self.failed())?;
        match self.average_guesses() {
            Some(avg) => writeln!(f, "Average guesses: {avg:.3}")?,
            None => writeln!(f, "Average guesses: n/a")?,
        }
        for (guesses, games) in &self.distribution {
            writeln!(f, "  {guesses}: {games}")?;
        }
        Ok(())
    }
}

/// Play `games` games with answers drawn from a generator seeded with `seed`.
pub fn run_benchmark(
    kind: StrategyKind,
    vocabulary: &Vocabulary,
    games: usize,
    seed: u64,
    max_guesses: usize,
) -> BenchmarkReport {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut strategy = kind.build(vocabulary.clone(), seed);
    let mut report = BenchmarkReport {
        strategy: strategy.name().to_string(),
        ..BenchmarkReport::default()
    };

    for _ in 0..games {
        let Some(secret) = Secret::random(vocabulary, &mut rng) else {
            break;
        };
        let outcome = play_game(strategy.as_mut(), secret, vocabulary, max_guesses);
        if !outcome.is_solved() {
            info_log!("run_benchmark() - game not solved: {}", outcome);
        }
        report.record(&outcome);
    }
    report
}
