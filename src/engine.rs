//! Candidate filtering and positional-frequency scoring.
//!
//! The engine owns the guessable vocabulary and the shrinking list of
//! possible answers. Strategies call [`CandidateEngine::eliminate`] once per
//! round and then pick their next word with [`CandidateEngine::best_guess`]
//! or the lower level scoring helpers.

use crate::debug_log;
use crate::feedback::{FeedbackResult, match_word};
use crate::wordbank::Vocabulary;
use std::collections::HashSet;

const ALPHABET_SIZE: usize = 26;

fn letter_index(c: char) -> Option<usize> {
    c.is_ascii_lowercase().then(|| (c as u8 - b'a') as usize)
}

/// Where a game stands, judged from the remaining candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No feedback applied yet
    Initialized,
    /// More than one candidate left
    Narrowing,
    /// Exactly one candidate left
    Solved,
    /// No candidate is consistent with the feedback history
    Exhausted,
}

/// Per-position letter counts over a set of words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    positions: Vec<[usize; ALPHABET_SIZE]>,
}

impl FrequencyTable {
    /// Count how many words have `letter` at `position`.
    pub fn count(&self, position: usize, letter: char) -> usize {
        match (self.positions.get(position), letter_index(letter)) {
            (Some(counts), Some(idx)) => counts[idx],
            _ => 0,
        }
    }

    pub fn word_length(&self) -> usize {
        self.positions.len()
    }
}

pub fn has_distinct_letters(word: &str) -> bool {
    let mut seen = HashSet::new();
    word.chars().all(|c| seen.insert(c))
}

/// Build the positional frequency table for `words`.
pub fn positional_frequency<S: AsRef<str>>(words: &[S], word_length: usize) -> FrequencyTable {
    let mut positions = vec![[0; ALPHABET_SIZE]; word_length];
    for word in words {
        for (i, c) in word.as_ref().chars().enumerate().take(word_length) {
            if let Some(idx) = letter_index(c) {
                positions[i][idx] += 1;
            }
        }
    }
    FrequencyTable { positions }
}

/// Sum of the positional counts of each letter of `word`.
pub fn score(word: &str, table: &FrequencyTable) -> usize {
    word.chars()
        .enumerate()
        .map(|(i, c)| table.count(i, c))
        .sum()
}

/// Highest scoring word of `words`; the first one wins a tie.
fn best_scoring<'a>(
    words: &'a [String],
    table: &FrequencyTable,
    require_distinct_letters: bool,
) -> Option<&'a str> {
    let mut best: Option<(&str, usize)> = None;
    for word in words {
        if require_distinct_letters && !has_distinct_letters(word) {
            continue;
        }
        let word_score = score(word, table);
        match best {
            Some((_, best_score)) if word_score <= best_score => {}
            _ => best = Some((word.as_str(), word_score)),
        }
    }
    best.map(|(word, _)| word)
}

#[derive(Debug, Clone)]
pub struct CandidateEngine {
    vocabulary: Vocabulary,
    possible_answers: Vec<String>,
    rounds: usize,
}

impl CandidateEngine {
    pub fn new(vocabulary: Vocabulary) -> Self {
        let possible_answers = vocabulary.possible_answers().to_vec();
        Self {
            vocabulary,
            possible_answers,
            rounds: 0,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn all_guessable(&self) -> &[String] {
        self.vocabulary.all_guessable()
    }

    pub fn possible_answers(&self) -> &[String] {
        &self.possible_answers
    }

    /// Number of candidates still possible.
    pub fn size(&self) -> usize {
        self.possible_answers.len()
    }

    pub fn word_length(&self) -> usize {
        self.vocabulary.word_length()
    }

    pub fn state(&self) -> EngineState {
        match self.possible_answers.len() {
            0 => EngineState::Exhausted,
            1 => EngineState::Solved,
            _ if self.rounds == 0 => EngineState::Initialized,
            _ => EngineState::Narrowing,
        }
    }

    /// Restore the full answer list for a new game.
    pub fn reset(&mut self) {
        self.possible_answers = self.vocabulary.possible_answers().to_vec();
        self.rounds = 0;
    }

    /// Would `candidate`, as the secret, have produced exactly `feedback`?
    pub fn is_consistent(candidate: &str, feedback: &FeedbackResult) -> bool {
        match_word(feedback.guess(), candidate).is_ok_and(|expected| expected == *feedback)
    }

    /// Keep only the candidates consistent with `feedback`.
    ///
    /// May leave the engine empty; that is reported through [`EngineState::Exhausted`].
    pub fn eliminate(&mut self, feedback: &FeedbackResult) {
        let before = self.possible_answers.len();
        self.possible_answers
            .retain(|candidate| Self::is_consistent(candidate, feedback));
        self.rounds += 1;
        debug_log!(
            "eliminate({}) - {} -> {} candidates",
            feedback,
            before,
            self.possible_answers.len()
        );
    }

    /// Drop a single word from the candidates. Returns whether it was present.
    pub fn remove(&mut self, word: &str) -> bool {
        let before = self.possible_answers.len();
        self.possible_answers.retain(|candidate| candidate != word);
        before != self.possible_answers.len()
    }

    pub fn positional_frequency<S: AsRef<str>>(&self, words: &[S]) -> FrequencyTable {
        positional_frequency(words, self.word_length())
    }

    /// Frequency table of the current candidates, rebuilt on every call.
    pub fn frequency_table(&self) -> FrequencyTable {
        self.positional_frequency(self.possible_answers.as_slice())
    }

    /// Pick the word with the highest positional frequency score.
    ///
    /// Scores every guessable word when `from_guessable` is set, otherwise
    /// only the remaining candidates. Returns `None` when no candidate is
    /// left or the filter leaves nothing to choose from.
    pub fn best_guess(&self, from_guessable: bool, require_distinct_letters: bool) -> Option<&str> {
        let source = if from_guessable {
            self.vocabulary.all_guessable()
        } else {
            self.possible_answers.as_slice()
        };
        self.best_guess_in(source, require_distinct_letters)
    }

    /// Like [`best_guess`](Self::best_guess) but over an explicit word list,
    /// still scored against the current candidates.
    pub fn best_guess_in<'a>(
        &self,
        words: &'a [String],
        require_distinct_letters: bool,
    ) -> Option<&'a str> {
        if self.possible_answers.is_empty() {
            return None;
        }
        let table = self.frequency_table();
        best_scoring(words, &table, require_distinct_letters)
    }

    /// The top `limit` candidates by score, highest first.
    pub fn ranked_candidates(&self, limit: usize) -> Vec<(&str, usize)> {
        let table = self.frequency_table();
        let mut scored: Vec<(&str, usize)> = self
            .possible_answers
            .iter()
            .map(|w| (w.as_str(), score(w, &table)))
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.truncate(limit);
        scored
    }
}
