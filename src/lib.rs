// Library interface for wordle-engine
// The binary in main.rs and the integration tests go through these modules

pub mod cli;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod game_state;
pub mod logging;
pub mod secret;
pub mod strategy;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use engine::{
    CandidateEngine, EngineState, FrequencyTable, has_distinct_letters, positional_frequency,
    score,
};
pub use error::{Result, WordleError};
pub use feedback::{FeedbackResult, Verdict, match_word};
pub use game_state::{BenchmarkReport, GameOutcome, GameStatus, play_game, run_benchmark};
pub use secret::Secret;
pub use strategy::{
    DistinctLetterStrategy, FrequencyStrategy, LetterKnowledge, ProbabilityStrategy, Strategy,
    StrategyKind,
};
pub use wordbank::{Vocabulary, load_wordbank_from_file, load_wordbank_from_str};
