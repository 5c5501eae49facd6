use thiserror::Error;

/// Errors surfaced by the matcher, the vocabulary and the secret provider.
///
/// An empty candidate set is deliberately not an error: it is an observable
/// engine state, see [`crate::engine::EngineState::Exhausted`].
#[derive(Debug, Error)]
pub enum WordleError {
    /// Two words that must share a length do not. Always a caller bug.
    #[error("word '{word}' has {actual} letters, expected {expected}")]
    LengthMismatch {
        word: String,
        expected: usize,
        actual: usize,
    },

    /// The guess is not in the guessable vocabulary. Recoverable by guessing another word.
    #[error("the word '{0}' is not a legal guess")]
    InvalidGuess(String),

    #[error("'{0}' is not a valid word: only letters a-z are allowed")]
    InvalidWord(String),

    #[error("the answer '{0}' is not in the list of guessable words")]
    AnswersNotSubset(String),

    #[error("the vocabulary contains no words")]
    EmptyVocabulary,

    #[error("invalid feedback '{0}': use G, Y or X for each letter")]
    InvalidFeedback(String),

    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WordleError>;
