//! Feedback matching between a guess and the secret answer.
//!
//! Verdicts follow the official rules: exact position matches are resolved
//! first, then the remaining letters of the secret are handed out as
//! `Present` from left to right. Any further copy of an exhausted letter is
//! `Absent`.

use crate::error::{Result, WordleError};
use std::collections::HashMap;
use std::fmt;

/// Verdict for a single letter of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Right letter, right position (green)
    Correct,
    /// Letter occurs elsewhere in the secret (yellow)
    Present,
    /// No unmatched copy of the letter is left in the secret (gray)
    Absent,
}

impl Verdict {
    /// Parse from a feedback character: G/2 green, Y/1 yellow, X/B/0 gray.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'G' | '2' => Some(Verdict::Correct),
            'Y' | '1' => Some(Verdict::Present),
            'X' | 'B' | '0' => Some(Verdict::Absent),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Verdict::Correct => 'G',
            Verdict::Present => 'Y',
            Verdict::Absent => 'X',
        }
    }
}

/// The verdicts produced for one guess, in guess order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackResult {
    guess: String,
    verdicts: Vec<Verdict>,
}

impl FeedbackResult {
    /// Build a result from feedback reported by an outside game, e.g. `("crane", "GYXXG")`.
    pub fn parse(guess: &str, pattern: &str) -> Result<Self> {
        let guess = guess.trim().to_lowercase();
        let pattern = pattern.trim();
        let expected = guess.chars().count();
        let actual = pattern.chars().count();
        if expected != actual {
            return Err(WordleError::LengthMismatch {
                word: pattern.to_string(),
                expected,
                actual,
            });
        }
        let verdicts = pattern
            .chars()
            .map(Verdict::from_char)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| WordleError::InvalidFeedback(pattern.to_string()))?;
        Ok(Self { guess, verdicts })
    }

    /// The guess this feedback was produced for.
    pub fn guess(&self) -> &str {
        &self.guess
    }

    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    /// `(letter, verdict)` pairs, one per position.
    pub fn iter(&self) -> impl Iterator<Item = (char, Verdict)> + '_ {
        self.guess.chars().zip(self.verdicts.iter().copied())
    }

    /// True when every letter is `Correct`.
    pub fn is_solved(&self) -> bool {
        self.verdicts.iter().all(|v| *v == Verdict::Correct)
    }

    /// Compact form such as `GYXXG`.
    pub fn pattern(&self) -> String {
        self.verdicts.iter().map(|v| v.to_char()).collect()
    }
}

impl fmt::Display for FeedbackResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess.to_uppercase(), self.pattern())
    }
}

/// Compare `guess` against `secret` and produce the feedback for every position.
///
/// Fails with [`WordleError::LengthMismatch`] when the two words differ in length.
/// Checking that the guess is a legal word is up to the caller, see
/// [`crate::secret::Secret::guess`].
pub fn match_word(guess: &str, secret: &str) -> Result<FeedbackResult> {
    let guess_chars: Vec<char> = guess.chars().collect();
    let secret_chars: Vec<char> = secret.chars().collect();
    if guess_chars.len() != secret_chars.len() {
        return Err(WordleError::LengthMismatch {
            word: guess.to_string(),
            expected: secret_chars.len(),
            actual: guess_chars.len(),
        });
    }

    let mut remaining: HashMap<char, usize> = HashMap::new();
    for &c in &secret_chars {
        *remaining.entry(c).or_insert(0) += 1;
    }

    let mut verdicts = vec![Verdict::Absent; guess_chars.len()];

    // First pass: greens
    for (i, (&g, &s)) in guess_chars.iter().zip(&secret_chars).enumerate() {
        if g == s {
            verdicts[i] = Verdict::Correct;
            if let Some(count) = remaining.get_mut(&g) {
                *count -= 1;
            }
        }
    }

    // Second pass: yellows, earlier positions first
    for (i, g) in guess_chars.iter().enumerate() {
        if verdicts[i] == Verdict::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(g)
            && *count > 0
        {
            *count -= 1;
            verdicts[i] = Verdict::Present;
        }
    }

    Ok(FeedbackResult {
        guess: guess.to_string(),
        verdicts,
    })
}
