use crate::engine::CandidateEngine;
use crate::error::Result;
use crate::game_state::{MAX_GUESSES, play_game, run_benchmark};
use crate::info_log;
use crate::secret::Secret;
use crate::strategy::StrategyKind;
use crate::wordbank::{
    EMBEDDED_WORDBANK, Vocabulary, load_wordbank_from_file, load_wordbank_from_str,
};
use clap::Parser;

/// Play Wordle games with a solving strategy and report how it did
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited list of guessable words
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Path to the list of possible answers (defaults to the guess list)
    #[arg(short = 'a', long = "answers")]
    pub answers_path: Option<String>,

    #[arg(short, long, value_enum, default_value_t = StrategyKind::Frequency)]
    pub strategy: StrategyKind,

    /// Number of games with random answers
    #[arg(short = 'n', long, default_value_t = 100)]
    pub games: usize,

    /// Seed for answer selection and the probability strategy
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Play a single game against this answer instead
    #[arg(long)]
    pub answer: Option<String>,

    #[arg(long, default_value_t = MAX_GUESSES)]
    pub max_guesses: usize,

    /// List the N best scoring candidates before playing
    #[arg(long, default_value_t = 0)]
    pub top: usize,

    /// Log solver decisions (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Guess list from `--input` or the embedded word bank, answers from
/// `--answers` or the guess list.
pub fn load_vocabulary(cli: &Cli) -> Result<Vocabulary> {
    let guessable = match &cli.wordbank_path {
        Some(path) => load_wordbank_from_file(path)?,
        None => load_wordbank_from_str(EMBEDDED_WORDBANK),
    };
    match &cli.answers_path {
        Some(path) => {
            let answers = load_wordbank_from_file(path)?;
            Vocabulary::new(guessable.as_slice(), answers.as_slice())
        }
        None => Vocabulary::single(guessable.as_slice()),
    }
}

/// Run what the options ask for and return the report to print.
pub fn run(cli: &Cli) -> Result<String> {
    let vocabulary = load_vocabulary(cli)?;
    info_log!(
        "Loaded {} guessable words, {} possible answers",
        vocabulary.all_guessable().len(),
        vocabulary.possible_answers().len()
    );

    let mut output = String::new();
    if cli.top > 0 {
        output.push_str(&top_candidates(&vocabulary, cli.top));
    }

    if let Some(answer) = &cli.answer {
        let secret = Secret::fixed(answer, &vocabulary)?;
        let mut strategy = cli.strategy.build(vocabulary.clone(), cli.seed);
        let outcome = play_game(strategy.as_mut(), secret, &vocabulary, cli.max_guesses);
        output.push_str(&format!("{outcome}\n"));
        return Ok(output);
    }

    let report = run_benchmark(
        cli.strategy,
        &vocabulary,
        cli.games,
        cli.seed,
        cli.max_guesses,
    );
    output.push_str(&report.to_string());
    Ok(output)
}

fn top_candidates(vocabulary: &Vocabulary, limit: usize) -> String {
    let engine = CandidateEngine::new(vocabulary.clone());
    let ranked: Vec<String> = engine
        .ranked_candidates(limit)
        .into_iter()
        .map(|(word, score)| format!("{} ({score})", word.to_uppercase()))
        .collect();
    format!("Top candidates: {}\n", ranked.join(", "))
}
