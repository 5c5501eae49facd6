use crate::error::{Result, WordleError};
use crate::feedback::{FeedbackResult, match_word};
use crate::wordbank::Vocabulary;
use rand::Rng;
use rand::seq::SliceRandom;

/// The answer of one game.
///
/// The word itself stays private; players only learn about it through the
/// feedback returned by [`Secret::guess`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret {
    word: String,
}

impl Secret {
    /// Use a chosen answer. It must be one of the vocabulary's possible answers.
    pub fn fixed(word: &str, vocabulary: &Vocabulary) -> Result<Self> {
        let word = word.trim().to_lowercase();
        if !vocabulary.is_possible_answer(&word) {
            return Err(WordleError::InvalidWord(word));
        }
        Ok(Self { word })
    }

    /// Draw an answer with the given random source. `None` when there are no answers.
    pub fn random<R: Rng + ?Sized>(vocabulary: &Vocabulary, rng: &mut R) -> Option<Self> {
        vocabulary
            .possible_answers()
            .choose(rng)
            .map(|word| Self { word: word.clone() })
    }

    /// Score `guess` against the answer.
    ///
    /// Fails with [`WordleError::InvalidGuess`] when the guess is not a legal word.
    pub fn guess(&self, guess: &str, vocabulary: &Vocabulary) -> Result<FeedbackResult> {
        let guess = guess.trim().to_lowercase();
        if !vocabulary.is_guessable(&guess) {
            return Err(WordleError::InvalidGuess(guess));
        }
        match_word(&guess, &self.word)
    }

    /// Give up the answer, e.g. to report it once the game is over.
    pub fn reveal(self) -> String {
        self.word
    }
}
