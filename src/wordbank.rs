use crate::debug_log;
use crate::error::{Result, WordleError};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

fn normalize(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    if !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(word)
    } else {
        None
    }
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        match normalize(&line) {
            Some(word) => words.push(word),
            None => {
                debug_log!("Skipping word bank line {:?}", line);
            }
        }
    }
    Ok(words)
}

/// The words of one game: everything that may be guessed, and the subset
/// that may be the answer.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    all_guessable: Vec<String>,
    possible_answers: Vec<String>,
    guessable_set: HashSet<String>,
    word_length: usize,
}

impl Vocabulary {
    /// Build a vocabulary from a guess list and an answer list.
    ///
    /// Words are lower-cased and duplicates dropped, keeping first occurrence.
    /// Every word must consist of letters only and share the length of the
    /// first guessable word, and every answer must also be guessable. Both
    /// lists must be non-empty.
    pub fn new<S: AsRef<str>>(guessable: &[S], answers: &[S]) -> Result<Self> {
        let all_guessable = dedup_words(guessable)?;
        let possible_answers = dedup_words(answers)?;
        let word_length = match all_guessable.first() {
            Some(word) if !possible_answers.is_empty() => word.len(),
            _ => return Err(WordleError::EmptyVocabulary),
        };

        for word in all_guessable.iter().chain(&possible_answers) {
            if word.len() != word_length {
                return Err(WordleError::LengthMismatch {
                    word: word.clone(),
                    expected: word_length,
                    actual: word.len(),
                });
            }
        }

        let guessable_set: HashSet<String> = all_guessable.iter().cloned().collect();
        if let Some(outsider) = possible_answers
            .iter()
            .find(|answer| !guessable_set.contains(answer.as_str()))
        {
            return Err(WordleError::AnswersNotSubset(outsider.clone()));
        }

        Ok(Self {
            all_guessable,
            possible_answers,
            guessable_set,
            word_length,
        })
    }

    /// Use the same list for guesses and answers.
    pub fn single<S: AsRef<str>>(words: &[S]) -> Result<Self> {
        Self::new(words, words)
    }

    pub fn embedded() -> Result<Self> {
        let words = load_wordbank_from_str(EMBEDDED_WORDBANK);
        Self::single(words.as_slice())
    }

    pub fn all_guessable(&self) -> &[String] {
        &self.all_guessable
    }

    pub fn possible_answers(&self) -> &[String] {
        &self.possible_answers
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn is_guessable(&self, word: &str) -> bool {
        self.guessable_set.contains(word)
    }

    pub fn is_possible_answer(&self, word: &str) -> bool {
        self.possible_answers.iter().any(|answer| answer == word)
    }
}

fn dedup_words<S: AsRef<str>>(words: &[S]) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(words.len());
    for word in words {
        let word = word.as_ref().trim().to_lowercase();
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordleError::InvalidWord(word));
        }
        if seen.insert(word.clone()) {
            out.push(word);
        }
    }
    Ok(out)
}
